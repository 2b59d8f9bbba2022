//! # busbay-core
//!
//! Core logic for the busbay college bus service.
//!
//! This crate provides:
//! - Seat allotment with a single-seat selection rule
//! - A persisted key-value store for the booked seat and notification state
//! - The bus schedule collection served by the backend
//! - A client for fetching schedules from the backend
//! - Notification feed, schedule search and session handling
//!
//! ## Architecture
//!
//! - [`seats`] - Seat layout generation, selection and booking
//! - [`store`] - Key-value store trait with memory and file backends
//! - [`buses`] - Bus document collection (create, read, update)
//! - [`schedules`] - Schedule records, catalog, validation and search
//! - [`routes`] - Stop timeline for a trip with the current stop marked
//! - [`client`] - HTTP client for `GET /buses`
//! - [`notifications`] - Notification feed with read-state
//! - [`session`] - Cosmetic login and role-dependent home menu
//! - [`config`] - Configuration loading, saving and validation
//! - [`error`] - Unified error types for the crate
//! - [`types`] - Shared types and OpenAPI schemas

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(missing_docs)]

pub mod buses;
pub mod client;
pub mod config;
pub mod error;
pub mod notifications;
pub mod routes;
pub mod schedules;
pub mod seats;
pub mod session;
pub mod store;
pub mod types;

// Re-export primary types for convenience
pub use buses::{BusDocument, BusRepository, RepositoryError, RepositoryResult};
pub use client::{ClientError, ScheduleClient};
pub use config::{
    default_config_path, default_data_dir, ApiConfig, Config, ConfigError, ConfigResult,
    SeatsConfig, ServerConfig, StorageConfig,
};
pub use error::{BusbayError, Result};
pub use notifications::{BusNotification, NotificationFeed, NotificationType};
pub use routes::{default_route, BusRoute, BusStop, RouteError};
pub use schedules::{default_catalog, sample_schedule, search, BusSchedule, ScheduleError};
pub use seats::{
    ConfirmOutcome, Navigator, PersistFailurePolicy, RecordingNavigator, Seat, SeatController,
    SeatError, SeatPosition, SeatStatus, SelectOutcome,
};
pub use session::{login, HomeMenu, Session, SessionError, UserRole};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, BOOKED_SEAT_KEY};
pub use types::HealthResponse;
