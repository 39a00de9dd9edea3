//! Utilities - common helpers and types
//!
//! - [`AppError`] / [`ApiResponse`] - re-exported from `shared::error`
//! - [`clock`] - injectable time source
//! - [`logger`] - tracing setup
//! - [`time`] - date/time helpers in the restaurant time zone

pub mod clock;
pub mod logger;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
