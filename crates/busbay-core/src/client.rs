//! HTTP client for the schedule backend.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error};

use crate::config::ApiConfig;
use crate::schedules::BusSchedule;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the schedule client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the body could not be decoded.
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}

/// Client for `GET /buses`.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScheduleClient {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `http://192.168.1.20:5000/api`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|source| ClientError::Transport {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { http, base_url })
    }

    /// Create a client for the configured API.
    ///
    /// # Errors
    ///
    /// See [`ScheduleClient::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::new(config.base_url.clone())
    }

    /// Root URL requests are made against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every bus schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-2xx responses and
    /// [`ClientError::Transport`] for network or decode failures.
    pub async fn get_bus_schedules(&self) -> Result<Vec<BusSchedule>, ClientError> {
        let url = format!("{}/buses", self.base_url);
        let result = self.fetch(&url).await;
        if let Err(e) = &result {
            error!(error = %e, "Error fetching bus schedules");
        }
        result
    }

    async fn fetch(&self, url: &str) -> Result<Vec<BusSchedule>, ClientError> {
        let transport = |source| ClientError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let schedules: Vec<BusSchedule> = response.json().await.map_err(transport)?;
        debug!(count = schedules.len(), "Fetched bus schedules");
        Ok(schedules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedules::sample_schedule;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_bus_schedules() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/buses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "_id": "3f6a1f52-5b5e-4d59-9a55-0d3b1c0d2a11",
                    "busNumber": "01",
                    "departureCity": "Coimbatore",
                    "departureTime": "6:30 AM",
                    "returnTime": "6:00 PM",
                    "stops": ["Saravanampatti", "Avinashi"],
                    "createdAt": "2025-01-01T00:00:00Z"
                }
            ])))
            .mount(&server)
            .await;

        let client = ScheduleClient::new(format!("{}/api/", server.uri())).unwrap();
        let schedules = client.get_bus_schedules().await.unwrap();
        assert_eq!(schedules, vec![sample_schedule()]);
    }

    #[test]
    fn test_base_url_from_config() {
        let client = ScheduleClient::from_config(&ApiConfig {
            base_url: "http://10.0.0.5:5000/api/".to_string(),
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://10.0.0.5:5000/api");
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/buses"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ScheduleClient::new(format!("{}/api", server.uri())).unwrap();
        let err = client.get_bus_schedules().await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/buses"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ScheduleClient::new(format!("{}/api", server.uri())).unwrap();
        let err = client.get_bus_schedules().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport { .. }));
    }
}
