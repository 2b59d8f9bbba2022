//! Route timeline: the stops a bus calls at, with arrival and departure
//! times and the distance travelled from the first stop.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::schedules::is_valid_clock_time;

/// Stop the timeline highlights when no live position is known.
pub const DEFAULT_CURRENT_STOP: &str = "Kovil Palayam";

/// One stop on a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "arrivalTime": "8:30 AM",
    "departureTime": "8:34 AM",
    "location": "Kovil Palayam",
    "distance": "30 km",
    "isCurrentStop": true
}))]
pub struct BusStop {
    /// When the bus reaches the stop.
    #[schema(example = "8:30 AM")]
    pub arrival_time: String,

    /// When the bus leaves the stop.
    #[schema(example = "8:34 AM")]
    pub departure_time: String,

    /// Stop name.
    #[schema(example = "Kovil Palayam")]
    pub location: String,

    /// Distance from the first stop, e.g. `30 km`.
    #[schema(example = "30 km")]
    pub distance: String,

    /// Boarding platform, where the stop has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Whether the bus is at this stop now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_current_stop: Option<bool>,
}

/// Route validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A time is not in `h:mm AM|PM` form.
    #[error("Stop '{location}' has invalid {field} '{value}'")]
    InvalidTime {
        /// Stop name.
        location: String,
        /// `arrivalTime` or `departureTime`.
        field: &'static str,
        /// Value provided.
        value: String,
    },

    /// The bus leaves a stop before reaching it, or reaches a stop before
    /// leaving the previous one.
    #[error("Stop '{0}' is out of time order")]
    OutOfOrder(String),

    /// The route has no stops.
    #[error("A route needs at least one stop")]
    Empty,
}

/// Minutes since midnight for a `h:mm AM|PM` time.
fn clock_minutes(value: &str) -> Option<u32> {
    if !is_valid_clock_time(value) {
        return None;
    }
    let (clock, meridiem) = value.split_once(' ')?;
    let (hours, minutes) = clock.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    let hours = match (hours, meridiem) {
        (12, "AM") => 0,
        (12, "PM") => 12,
        (h, "PM") => h + 12,
        (h, _) => h,
    };
    Some(hours * 60 + minutes)
}

impl BusStop {
    fn new(arrival: &str, departure: &str, location: &str, km: u32) -> Self {
        Self {
            arrival_time: arrival.to_string(),
            departure_time: departure.to_string(),
            location: location.to_string(),
            distance: format!("{km} km"),
            platform: None,
            is_current_stop: None,
        }
    }

    fn minutes(&self, field: &'static str, value: &str) -> Result<u32, RouteError> {
        clock_minutes(value).ok_or_else(|| RouteError::InvalidTime {
            location: self.location.clone(),
            field,
            value: value.to_string(),
        })
    }
}

/// Ordered stops of one trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BusRoute {
    /// Stops in travel order.
    pub stops: Vec<BusStop>,
}

impl BusRoute {
    /// Check times are well formed and never run backwards.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.stops.is_empty() {
            return Err(RouteError::Empty);
        }
        let mut previous_departure = 0;
        for stop in &self.stops {
            let arrival = stop.minutes("arrivalTime", &stop.arrival_time)?;
            let departure = stop.minutes("departureTime", &stop.departure_time)?;
            if arrival < previous_departure || departure < arrival {
                return Err(RouteError::OutOfOrder(stop.location.clone()));
            }
            previous_departure = departure;
        }
        Ok(())
    }

    /// Copy of the timeline with `location` marked as the current stop.
    ///
    /// Returns `None` if the route does not call at `location`.
    #[must_use]
    pub fn with_current_stop(&self, location: &str) -> Option<Self> {
        let index = self
            .stops
            .iter()
            .position(|stop| stop.location.eq_ignore_ascii_case(location))?;
        let stops = self
            .stops
            .iter()
            .enumerate()
            .map(|(i, stop)| BusStop {
                is_current_stop: (i == index).then_some(true),
                ..stop.clone()
            })
            .collect();
        Some(Self { stops })
    }

    /// The stop marked current, if any.
    #[must_use]
    pub fn current_stop(&self) -> Option<&BusStop> {
        self.stops
            .iter()
            .find(|stop| stop.is_current_stop == Some(true))
    }
}

/// Morning route from Coimbatore to the campus.
#[must_use]
pub fn default_route() -> BusRoute {
    BusRoute {
        stops: vec![
            BusStop::new("8:04 AM", "8:05 AM", "Coimbatore", 0),
            BusStop::new("8:11 AM", "8:15 AM", "Vinayagapuram", 10),
            BusStop::new("8:17 AM", "8:19 AM", "Saravanampatti", 22),
            BusStop::new("8:30 AM", "8:34 AM", "Kovil Palayam", 30),
            BusStop::new("8:40 AM", "8:44 AM", "Ganeshapuram", 40),
            BusStop::new("8:46 AM", "8:46 AM", "Annur", 48),
            BusStop::new("8:52 AM", "8:53 AM", "Puliyampatti", 62),
            BusStop::new("8:59 AM", "9:00 AM", "Kanthi Nagar", 70),
            BusStop::new("9:03 AM", "9:05 AM", "Sathyamangalam", 80),
            BusStop::new("9:08 AM", "9:10 AM", "BIT", 85),
        ],
    }
}
