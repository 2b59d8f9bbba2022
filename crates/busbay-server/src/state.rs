//! Application state shared across handlers.

use std::sync::Arc;

use busbay_core::{BusRepository, Config};
use tokio::sync::RwLock;

/// State shared by every handler.
pub type SharedState = Arc<RwLock<AppState>>;

/// Application state.
#[derive(Debug)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Config,
    /// Bus schedule collection.
    pub buses: BusRepository,
}

impl AppState {
    /// Open the bus collection described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted collection cannot be read.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let buses = if config.storage.persist {
            BusRepository::open(&config.storage.data_dir)?
        } else {
            BusRepository::in_memory()
        };
        Ok(Self { config, buses })
    }

    /// State with an in-memory collection and default configuration.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            config: Config::default(),
            buses: BusRepository::in_memory(),
        }
    }

    /// Wrap for sharing between handlers.
    #[must_use]
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }
}
