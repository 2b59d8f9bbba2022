//! Bus schedule API endpoints.
//!
//! One collection, five operations: list, fetch by id, create, replace and
//! insert the sample schedule. The mobile app only reads; the write routes
//! are used by the transport office and for seeding test data.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use busbay_core::{BusDocument, BusSchedule};
use tracing::info;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::state::SharedState;

/// Creates the buses router with all endpoints.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_buses).post(create_bus))
        .route("/sample", post(create_sample_bus))
        .route("/{id}", get(get_bus).put(update_bus))
}

fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_id(raw))
}

/// List every bus schedule.
#[utoipa::path(
    get,
    path = "/api/buses",
    tag = "buses",
    operation_id = "listBuses",
    summary = "List bus schedules",
    description = "Returns every stored bus schedule in insertion order.",
    responses(
        (status = 200, description = "Schedules retrieved", body = [BusDocument])
    )
)]
pub async fn list_buses(State(state): State<SharedState>) -> Json<Vec<BusDocument>> {
    let state_guard = state.read().await;
    Json(state_guard.buses.list().to_vec())
}

/// Fetch one bus schedule.
#[utoipa::path(
    get,
    path = "/api/buses/{id}",
    tag = "buses",
    operation_id = "getBus",
    summary = "Get a bus schedule",
    params(("id" = String, Path, description = "Bus schedule id (UUID)")),
    responses(
        (status = 200, description = "Schedule retrieved", body = BusDocument),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No schedule with this id")
    )
)]
pub async fn get_bus(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BusDocument>> {
    let id = parse_id(&id)?;
    let state_guard = state.read().await;
    Ok(Json(state_guard.buses.get(id)?.clone()))
}

/// Create a bus schedule.
#[utoipa::path(
    post,
    path = "/api/buses",
    tag = "buses",
    operation_id = "createBus",
    summary = "Create a bus schedule",
    request_body = BusSchedule,
    responses(
        (status = 201, description = "Schedule created", body = BusDocument),
        (status = 400, description = "Invalid schedule"),
        (status = 409, description = "Bus number already in use")
    )
)]
pub async fn create_bus(
    State(state): State<SharedState>,
    body: Result<Json<BusSchedule>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<BusDocument>)> {
    let Json(schedule) = body?;
    let mut state_guard = state.write().await;
    let document = state_guard.buses.create(schedule)?;
    info!(id = %document.id, bus = %document.schedule.bus_number, "Bus schedule created");
    Ok((StatusCode::CREATED, Json(document)))
}

/// Replace a bus schedule.
#[utoipa::path(
    put,
    path = "/api/buses/{id}",
    tag = "buses",
    operation_id = "updateBus",
    summary = "Replace a bus schedule",
    params(("id" = String, Path, description = "Bus schedule id (UUID)")),
    request_body = BusSchedule,
    responses(
        (status = 200, description = "Schedule updated", body = BusDocument),
        (status = 400, description = "Malformed id or invalid schedule"),
        (status = 404, description = "No schedule with this id"),
        (status = 409, description = "Bus number already in use")
    )
)]
pub async fn update_bus(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<BusSchedule>, JsonRejection>,
) -> ApiResult<Json<BusDocument>> {
    let id = parse_id(&id)?;
    let Json(schedule) = body?;
    let mut state_guard = state.write().await;
    let document = state_guard.buses.update(id, schedule)?;
    info!(%id, "Bus schedule updated");
    Ok(Json(document))
}

/// Insert the sample schedule.
#[utoipa::path(
    post,
    path = "/api/buses/sample",
    tag = "buses",
    operation_id = "createSampleBus",
    summary = "Insert the sample bus schedule",
    description = "Adds bus 01 from Coimbatore for testing. Fails with 409 if it already exists.",
    responses(
        (status = 201, description = "Sample created", body = BusDocument),
        (status = 409, description = "Sample already present")
    )
)]
pub async fn create_sample_bus(
    State(state): State<SharedState>,
) -> ApiResult<(StatusCode, Json<BusDocument>)> {
    let mut state_guard = state.write().await;
    let document = state_guard.buses.insert_sample()?;
    Ok((StatusCode::CREATED, Json(document)))
}
