//! # busbay-server
//!
//! HTTP server for the busbay college bus service.
//!
//! This binary provides:
//! - REST API for the bus schedule collection
//! - OpenAPI document at `/api/openapi.json`
//! - Structured logging to file and stdout
//!
//! ## Running
//!
//! ```bash
//! # Development
//! cargo run --package busbay-server
//!
//! # Production
//! BUSBAY_ENV=production BUSBAY_CONFIG=/etc/busbay/config.toml ./busbay-server
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::net::SocketAddr;

use anyhow::Context;
use busbay_core::Config;
use busbay_server::api;
use busbay_server::logging;
use busbay_server::state::AppState;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    logging::init(logging::is_production(), &config.storage.data_dir)?;

    info!("Starting busbay-server");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState::new(config)?;
    info!(buses = state.buses.len(), "Bus collection loaded");

    let app = api::create_router(state.shared());

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
