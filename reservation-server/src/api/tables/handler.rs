//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::DiningTable;

use crate::api::extract::{DataBody, parse_id};
use crate::api::reservations::load as load_reservation;
use crate::core::ServerState;
use crate::db::repository::dining_table::{self, SeatOutcome};
use crate::tables::{
    TableError, check_seatable, check_seating, check_unseat, seat_request, validate_table,
};
use crate::utils::{ApiResponse, AppResult};

async fn load(state: &ServerState, raw_id: &str) -> AppResult<DiningTable> {
    let not_found = || TableError::TableNotFound(raw_id.to_string());
    let id = parse_id(raw_id).ok_or_else(not_found)?;
    let found = dining_table::find_by_id(state.pool(), id).await?;
    Ok(found.ok_or_else(not_found)?)
}

/// GET /tables - all tables by name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<DiningTable>>>> {
    let tables = dining_table::find_all(state.pool()).await?;
    Ok(Json(ApiResponse::success(tables)))
}

/// POST /tables
pub async fn create(
    State(state): State<ServerState>,
    DataBody(data): DataBody,
) -> AppResult<(StatusCode, Json<ApiResponse<DiningTable>>)> {
    let payload = validate_table(&data)?;
    let table = dining_table::create(state.pool(), payload).await?;
    tracing::info!(table_id = table.table_id, name = %table.table_name, "Table created");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(table))))
}

/// PUT /tables/{table_id}/seat - seat a booked reservation
pub async fn seat(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    DataBody(data): DataBody,
) -> AppResult<Json<ApiResponse<DiningTable>>> {
    let reservation_id = seat_request(&data)?;
    let table = load(&state, &id).await?;
    let reservation = load_reservation(&state, &reservation_id.to_string()).await?;
    check_seating(&table, &reservation)?;

    let seated = match dining_table::seat(state.pool(), table.table_id, reservation_id).await? {
        SeatOutcome::Seated(seated) => seated,
        SeatOutcome::TableTaken => return Err(TableError::TableOccupied(table.table_id).into()),
        SeatOutcome::ReservationTaken => {
            // moved on since it was loaded; report its current state
            let current = load_reservation(&state, &reservation_id.to_string()).await?;
            check_seatable(&current)?;
            return Err(TableError::AlreadySeated(reservation_id).into());
        }
    };

    tracing::info!(table_id = seated.table_id, reservation_id, "Reservation seated");
    Ok(Json(ApiResponse::success(seated)))
}

/// DELETE /tables/{table_id}/seat - free the table and finish its reservation
pub async fn finish(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<DiningTable>>> {
    let table = load(&state, &id).await?;
    let reservation_id = check_unseat(&table)?;

    let freed = dining_table::finish(state.pool(), table.table_id, reservation_id).await?;
    tracing::info!(table_id = freed.table_id, reservation_id, "Table freed");
    Ok(Json(ApiResponse::success(freed)))
}
