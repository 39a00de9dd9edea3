//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::models::{Reservation, ReservationQuery};

use crate::api::extract::{DataBody, parse_id};
use crate::core::ServerState;
use crate::db::repository::reservation;
use crate::reservations::validation::parse_iso_date;
use crate::reservations::{
    ReservationError, ensure_editable, parse_status, set_status, validate_reservation,
};
use crate::utils::time::local_today;
use crate::utils::{ApiResponse, AppResult};

/// Look up a reservation by its raw path id; unknown and non-numeric ids are 404
pub(crate) async fn load(state: &ServerState, raw_id: &str) -> AppResult<Reservation> {
    let not_found = || ReservationError::NotFound(raw_id.to_string());
    let id = parse_id(raw_id).ok_or_else(not_found)?;
    let found = reservation::find_by_id(state.pool(), id).await?;
    Ok(found.ok_or_else(not_found)?)
}

/// GET /reservations - by date, by mobile number, or today
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReservationQuery>,
) -> AppResult<Json<ApiResponse<Vec<Reservation>>>> {
    let date = query.date.as_deref().filter(|d| !d.trim().is_empty());
    let mobile = query.mobile_number.as_deref().filter(|m| !m.trim().is_empty());

    let reservations = match (date, mobile) {
        (Some(raw), _) => {
            let date = parse_iso_date(raw.trim()).ok_or(ReservationError::InvalidFormat {
                field: "date",
                expected: "YYYY-MM-DD",
            })?;
            reservation::list_by_date(state.pool(), date).await?
        }
        (None, Some(mobile)) => reservation::search_by_mobile(state.pool(), mobile).await?,
        (None, None) => {
            let today = local_today(state.clock.now(), state.policy().timezone);
            reservation::list_by_date(state.pool(), today).await?
        }
    };

    Ok(Json(ApiResponse::success(reservations)))
}

/// GET /reservations/{reservation_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    let found = load(&state, &id).await?;
    Ok(Json(ApiResponse::success(found)))
}

/// POST /reservations - validate, then create as `booked`
pub async fn create(
    State(state): State<ServerState>,
    DataBody(data): DataBody,
) -> AppResult<(StatusCode, Json<ApiResponse<Reservation>>)> {
    let payload = validate_reservation(&data, state.policy(), state.clock.now())?;
    let created = reservation::create(state.pool(), payload).await?;

    tracing::info!(
        reservation_id = created.reservation_id,
        date = %created.reservation_date,
        people = created.people,
        "Reservation created"
    );
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// PUT /reservations/{reservation_id} - full edit of a booked reservation
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    DataBody(data): DataBody,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    let current = load(&state, &id).await?;
    let payload = validate_reservation(&data, state.policy(), state.clock.now())?;
    ensure_editable(current.status)?;

    let updated = reservation::update(state.pool(), current.reservation_id, payload).await?;
    tracing::info!(reservation_id = updated.reservation_id, "Reservation updated");
    Ok(Json(ApiResponse::success(updated)))
}

/// PUT /reservations/{reservation_id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    DataBody(data): DataBody,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    let current = load(&state, &id).await?;
    let requested = parse_status(&data)?;
    let next = set_status(current.status, requested)?;

    let updated = reservation::update_status(state.pool(), current.reservation_id, next).await?;
    tracing::info!(
        reservation_id = updated.reservation_id,
        from = %current.status,
        to = %updated.status,
        "Reservation status changed"
    );
    Ok(Json(ApiResponse::success(updated)))
}
