//! Data models
//!
//! Shared between the server and API clients.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod dining_table;
pub mod reservation;

// Re-exports
pub use dining_table::*;
pub use reservation::{
    Reservation, ReservationCreate, ReservationQuery, ReservationStatus, UnknownStatus,
};
