//! Unified error types for the busbay core library.
//!
//! Each module has its own error enum (`SeatError`, `StoreError`,
//! `RepositoryError`, `RouteError`, `ClientError`, `SessionError`,
//! `ConfigError`). They all convert into [`BusbayError`], which carries an
//! HTTP status and a machine-readable code for API responses.
//!
//! # Example
//!
//! ```rust
//! use busbay_core::error::{BusbayError, Result};
//!
//! fn find(id: uuid::Uuid, known: bool) -> Result<()> {
//!     if !known {
//!         return Err(BusbayError::BusNotFound(id));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;
use uuid::Uuid;

/// The unified error type for all busbay operations.
#[derive(Debug, Error)]
pub enum BusbayError {
    // =========================================================================
    // SEAT ERRORS
    // =========================================================================
    /// The confirmed seat could not be saved and the booking was rolled back.
    #[error("Could not save booking for seat {seat_id}. Please try again.")]
    BookingNotSaved {
        /// Seat left selected.
        seat_id: String,
    },

    /// The seat layout probability is out of range.
    #[error("Invalid seat layout: {0}")]
    InvalidLayout(String),

    // =========================================================================
    // BUS COLLECTION ERRORS
    // =========================================================================
    /// No bus document has this id.
    #[error("Bus schedule not found: {0}")]
    BusNotFound(Uuid),

    /// The bus number is taken by another document.
    #[error("Bus number '{0}' is already in use")]
    DuplicateBusNumber(String),

    /// The submitted schedule is malformed.
    #[error("Invalid bus schedule: {0}")]
    InvalidSchedule(String),

    // =========================================================================
    // SESSION ERRORS
    // =========================================================================
    /// Username or password missing.
    #[error("Please enter both username and password.")]
    MissingCredentials,

    // =========================================================================
    // UPSTREAM ERRORS
    // =========================================================================
    /// The schedule API could not be reached or answered badly.
    #[error("Schedule service unavailable: {0}")]
    Upstream(String),

    // =========================================================================
    // CONFIGURATION ERRORS
    // =========================================================================
    /// The configuration could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParseError(String),

    /// The configuration holds invalid values.
    #[error("Configuration validation failed: {0}")]
    ConfigValidationError(String),

    // =========================================================================
    // PERSISTENCE & I/O ERRORS
    // =========================================================================
    /// Reading or writing persisted data failed.
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// A low-level I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized [`Result`] type for busbay operations.
pub type Result<T> = std::result::Result<T, BusbayError>;

impl BusbayError {
    /// Returns `true` if the caller sent something unusable.
    #[inline]
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.http_status_code() < 500
    }

    /// Returns `true` if this error is related to I/O or persistence.
    #[inline]
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(
            self,
            Self::PersistenceError(_) | Self::IoError(_) | Self::BookingNotSaved { .. }
        )
    }

    /// Returns `true` if retrying the same operation may succeed.
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::BookingNotSaved { .. } | Self::Upstream(_))
    }

    /// Returns an HTTP-appropriate status code for this error.
    #[inline]
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidSchedule(_) | Self::InvalidLayout(_) | Self::MissingCredentials => 400,
            Self::BusNotFound(_) => 404,
            Self::DuplicateBusNumber(_) => 409,
            Self::ConfigParseError(_) | Self::ConfigValidationError(_) => 422,
            Self::PersistenceError(_) | Self::IoError(_) | Self::BookingNotSaved { .. } => 500,
            Self::Upstream(_) => 502,
        }
    }

    /// Returns a machine-readable error code for API responses.
    #[inline]
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BookingNotSaved { .. } => "booking_not_saved",
            Self::InvalidLayout(_) => "invalid_layout",
            Self::BusNotFound(_) => "bus_not_found",
            Self::DuplicateBusNumber(_) => "duplicate_bus_number",
            Self::InvalidSchedule(_) => "invalid_schedule",
            Self::MissingCredentials => "missing_credentials",
            Self::Upstream(_) => "upstream_unavailable",
            Self::ConfigParseError(_) => "config_parse_error",
            Self::ConfigValidationError(_) => "config_validation_error",
            Self::PersistenceError(_) => "persistence_error",
            Self::IoError(_) => "io_error",
        }
    }
}

// =============================================================================
// CONVERSIONS FROM MODULE-SPECIFIC ERRORS
// =============================================================================

impl From<crate::seats::SeatError> for BusbayError {
    fn from(err: crate::seats::SeatError) -> Self {
        use crate::seats::SeatError;
        match err {
            SeatError::Persist { seat_id, .. } => Self::BookingNotSaved { seat_id },
            e @ SeatError::InvalidProbability(_) => Self::InvalidLayout(e.to_string()),
        }
    }
}

impl From<crate::store::StoreError> for BusbayError {
    fn from(err: crate::store::StoreError) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

impl From<crate::buses::RepositoryError> for BusbayError {
    fn from(err: crate::buses::RepositoryError) -> Self {
        use crate::buses::RepositoryError;
        match err {
            RepositoryError::NotFound(id) => Self::BusNotFound(id),
            RepositoryError::DuplicateBusNumber(number) => Self::DuplicateBusNumber(number),
            RepositoryError::Invalid(e) => Self::InvalidSchedule(e.to_string()),
            e @ (RepositoryError::ReadError { .. }
            | RepositoryError::WriteError { .. }
            | RepositoryError::ParseError { .. }) => Self::PersistenceError(e.to_string()),
        }
    }
}

impl From<crate::schedules::ScheduleError> for BusbayError {
    fn from(err: crate::schedules::ScheduleError) -> Self {
        Self::InvalidSchedule(err.to_string())
    }
}

impl From<crate::routes::RouteError> for BusbayError {
    fn from(err: crate::routes::RouteError) -> Self {
        Self::InvalidSchedule(err.to_string())
    }
}

impl From<crate::client::ClientError> for BusbayError {
    fn from(err: crate::client::ClientError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<crate::session::SessionError> for BusbayError {
    fn from(err: crate::session::SessionError) -> Self {
        match err {
            crate::session::SessionError::MissingCredentials => Self::MissingCredentials,
        }
    }
}

impl From<crate::config::ConfigError> for BusbayError {
    fn from(err: crate::config::ConfigError) -> Self {
        use crate::config::ConfigError;
        match err {
            ConfigError::ParseError(e) => Self::ConfigParseError(e.to_string()),
            ConfigError::SerializeError(e) => Self::ConfigParseError(e.to_string()),
            ConfigError::ValidationError { field, message } => {
                Self::ConfigValidationError(format!("{field}: {message}"))
            }
            ConfigError::MultipleValidationErrors(errors) => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                Self::ConfigValidationError(messages.join("; "))
            }
            e @ (ConfigError::ReadError { .. }
            | ConfigError::WriteError { .. }
            | ConfigError::NoConfigDir) => Self::PersistenceError(e.to_string()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buses::RepositoryError;
    use crate::schedules::ScheduleError;
    use crate::seats::SeatError;
    use crate::store::StoreError;
    use std::io::{Error as IoErr, ErrorKind};

    #[test]
    fn test_http_status_codes() {
        assert_eq!(BusbayError::BusNotFound(Uuid::nil()).http_status_code(), 404);
        assert_eq!(
            BusbayError::DuplicateBusNumber("01".into()).http_status_code(),
            409
        );
        assert_eq!(
            BusbayError::InvalidSchedule("x".into()).http_status_code(),
            400
        );
        assert_eq!(BusbayError::Upstream("x".into()).http_status_code(), 502);
        assert_eq!(
            BusbayError::PersistenceError("disk full".into()).http_status_code(),
            500
        );
    }

    #[test]
    fn test_classification() {
        assert!(BusbayError::MissingCredentials.is_client_error());
        assert!(!BusbayError::PersistenceError("x".into()).is_client_error());
        assert!(BusbayError::IoError(IoErr::new(ErrorKind::NotFound, "x")).is_io_error());
        assert!(BusbayError::BookingNotSaved { seat_id: "3B".into() }.is_recoverable());
        assert!(!BusbayError::BusNotFound(Uuid::nil()).is_recoverable());
    }

    #[test]
    fn test_from_seat_error() {
        let err: BusbayError = SeatError::Persist {
            seat_id: "3B".into(),
            source: StoreError::Unavailable("offline".into()),
        }
        .into();
        assert_eq!(err.error_code(), "booking_not_saved");
        assert!(err.to_string().contains("3B"));
    }

    #[test]
    fn test_from_repository_error() {
        let err: BusbayError = RepositoryError::Invalid(ScheduleError::NoStops).into();
        assert_eq!(err.error_code(), "invalid_schedule");

        let id = Uuid::new_v4();
        let err: BusbayError = RepositoryError::NotFound(id).into();
        assert!(matches!(err, BusbayError::BusNotFound(found) if found == id));
    }

    #[test]
    fn test_from_route_error() {
        let err: BusbayError = crate::routes::RouteError::Empty.into();
        assert_eq!(err.error_code(), "invalid_schedule");
        assert_eq!(err.http_status_code(), 400);
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<BusbayError>();
        assert_sync::<BusbayError>();
    }
}
