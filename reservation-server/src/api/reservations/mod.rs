//! Reservation API

mod handler;

pub(crate) use handler::load;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{reservation_id}", get(handler::get_by_id).put(handler::update))
        .route("/{reservation_id}/status", put(handler::update_status))
}
