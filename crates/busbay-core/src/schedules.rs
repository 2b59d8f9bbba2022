//! Bus schedule records, the built-in catalog and schedule search.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Clock times as shown on the schedule board, e.g. `7:05 AM`.
static TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(1[0-2]|0?[1-9]):[0-5][0-9] (AM|PM)$").expect("Invalid time regex")
});

/// One bus and its daily trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "busNumber": "01",
    "departureCity": "Coimbatore",
    "departureTime": "6:30 AM",
    "returnTime": "6:00 PM",
    "stops": ["Saravanampatti", "Avinashi"]
}))]
pub struct BusSchedule {
    /// Bus identifier shown to students.
    #[schema(example = "01")]
    pub bus_number: String,

    /// Where the morning trip starts.
    #[schema(example = "Coimbatore")]
    pub departure_city: String,

    /// Morning departure time.
    #[schema(example = "6:30 AM")]
    pub departure_time: String,

    /// Evening return time.
    #[schema(example = "6:00 PM")]
    pub return_time: String,

    /// Intermediate stops in travel order.
    pub stops: Vec<String>,
}

/// Validation errors for schedule records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A required text field is blank.
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    /// A time field is not in `h:mm AM|PM` form.
    #[error("Field '{field}' must look like '7:05 AM' (got '{value}')")]
    InvalidTime {
        /// Offending field.
        field: &'static str,
        /// Value provided.
        value: String,
    },

    /// The stop list is empty.
    #[error("At least one stop is required")]
    NoStops,
}

impl BusSchedule {
    /// Check that every field is present and well formed.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.bus_number.trim().is_empty() {
            return Err(ScheduleError::MissingField("busNumber"));
        }
        if self.departure_city.trim().is_empty() {
            return Err(ScheduleError::MissingField("departureCity"));
        }
        for (field, value) in [
            ("departureTime", &self.departure_time),
            ("returnTime", &self.return_time),
        ] {
            if value.trim().is_empty() {
                return Err(ScheduleError::MissingField(field));
            }
            if !is_valid_clock_time(value) {
                return Err(ScheduleError::InvalidTime {
                    field,
                    value: value.clone(),
                });
            }
        }
        if self.stops.iter().all(|stop| stop.trim().is_empty()) {
            return Err(ScheduleError::NoStops);
        }
        Ok(())
    }

    /// Whether this schedule matches a search query.
    ///
    /// Matching is a case-insensitive substring test on the bus number and
    /// the departure city. An empty query matches everything. The query is
    /// used as typed, surrounding whitespace included.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        query.is_empty()
            || self.bus_number.to_lowercase().contains(&query)
            || self.departure_city.to_lowercase().contains(&query)
    }
}

/// Whether `value` is a clock time like `7:05 AM`.
#[must_use]
pub fn is_valid_clock_time(value: &str) -> bool {
    TIME_REGEX.is_match(value)
}

/// Schedules matching `query`, in their original order.
pub fn search<'a>(schedules: &'a [BusSchedule], query: &str) -> Vec<&'a BusSchedule> {
    schedules.iter().filter(|s| s.matches(query)).collect()
}

/// The schedule inserted by the backend's sample endpoint.
#[must_use]
pub fn sample_schedule() -> BusSchedule {
    schedule("01", "Coimbatore", "6:30 AM", "6:00 PM", &["Saravanampatti", "Avinashi"])
}

/// Schedules shown when the app has no network data.
#[must_use]
pub fn default_catalog() -> Vec<BusSchedule> {
    vec![
        schedule("Bus No: 1", "Coimbatore", "7:00 AM", "6:00 PM", &["Annur", "Puliyampatti"]),
        schedule(
            "Bus No: 2",
            "Gandhipuram",
            "7:15 AM",
            "6:15 PM",
            &["Saravanampatti", "Annur", "Puliyampatti"],
        ),
        schedule(
            "Bus No: 3",
            "RS Puram",
            "7:30 AM",
            "6:30 PM",
            &["Thudiyalur", "Annur", "Puliyampatti"],
        ),
        schedule(
            "Bus No: 4",
            "Ukkadam",
            "7:00 AM",
            "6:00 PM",
            &["Singanallur", "Annur", "Puliyampatti"],
        ),
        schedule(
            "Bus No: 5",
            "Singanallur",
            "7:20 AM",
            "6:20 PM",
            &["Ganapathy", "Annur", "Puliyampatti"],
        ),
        schedule(
            "Bus No: 6",
            "Peelamedu",
            "7:45 AM",
            "6:45 PM",
            &["Hopes", "Annur", "Puliyampatti"],
        ),
        schedule(
            "Bus No: 7",
            "Saravanampatti",
            "7:10 AM",
            "6:10 PM",
            &["Kovil Palayam", "Annur", "Puliyampatti"],
        ),
        schedule(
            "Bus No: 8",
            "Thudiyalur",
            "7:05 AM",
            "6:05 PM",
            &["Ganeshapuram", "Annur", "Puliyampatti"],
        ),
        schedule(
            "Bus No: 9",
            "Ganapathy",
            "7:25 AM",
            "6:25 PM",
            &["Vinayagapuram", "Annur", "Puliyampatti"],
        ),
        schedule(
            "Bus No: 10",
            "Hopes",
            "7:35 AM",
            "6:35 PM",
            &["Kanthi Nagar", "Annur", "Puliyampatti"],
        ),
    ]
}

fn schedule(bus: &str, city: &str, departs: &str, returns: &str, stops: &[&str]) -> BusSchedule {
    BusSchedule {
        bus_number: bus.to_string(),
        departure_city: city.to_string(),
        departure_time: departs.to_string(),
        return_time: returns.to_string(),
        stops: stops.iter().map(ToString::to_string).collect(),
    }
}
