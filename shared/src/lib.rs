//! Shared types for the reservation service
//!
//! Domain models, the unified error system, and small utilities used by
//! the server crate and by API clients.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{DiningTable, Reservation, ReservationStatus, UnknownStatus};
