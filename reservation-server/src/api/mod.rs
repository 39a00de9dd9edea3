//! API routes
//!
//! - [`health`] - liveness and database check
//! - [`reservations`] - reservation listing, creation, edits, status changes
//! - [`tables`] - dining tables and seating
//!
//! Success bodies are `{"data": ...}`; errors are
//! `{"status", "code", "message", "details"?}`.

pub mod extract;
pub mod health;
pub mod reservations;
pub mod tables;

pub use crate::utils::{ApiResponse, AppResult};
