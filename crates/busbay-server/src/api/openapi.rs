//! OpenAPI specification generation for the busbay API.

use axum::Json;
use busbay_core::{BusDocument, BusSchedule, HealthResponse};
use utoipa::OpenApi;

use super::error::ErrorResponse;

/// Serve the OpenAPI specification as JSON at `/api/openapi.json`.
pub async fn get_openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Returns the OpenAPI specification as a pretty-printed string.
/// Used by the gen-openapi binary.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn get_openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}

/// Main OpenAPI document structure for busbay.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "busbay API",
        version = "0.1.0",
        description = r#"
# busbay API

Bus schedules for the college transport service.

The mobile app reads `GET /api/buses` to show departure and return times
and the stops of every bus. The remaining routes maintain the collection.
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local busbay server")
    ),
    tags(
        (name = "system", description = "Health checks"),
        (name = "buses", description = "Bus schedule collection")
    ),
    paths(
        super::health::health_check,
        super::buses::list_buses,
        super::buses::get_bus,
        super::buses::create_bus,
        super::buses::update_bus,
        super::buses::create_sample_bus,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            BusSchedule,
            BusDocument,
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generation() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "busbay API");
        assert!(spec.paths.paths.contains_key("/api/buses"));
        assert!(spec.paths.paths.contains_key("/api/buses/{id}"));
    }

    #[test]
    fn test_openapi_json_serialization() {
        let json = get_openapi_json().unwrap();
        assert!(json.contains("\"openapi\":"));
        assert!(json.contains("\"busbay API\""));
        assert!(json.contains("createSampleBus"));
    }
}
