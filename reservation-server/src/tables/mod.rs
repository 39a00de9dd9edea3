//! Dining table rules
//!
//! Validation of new tables and the seating preconditions checked before a
//! reservation is placed at a table.

pub mod error;
pub mod validation;

pub use error::TableError;
pub use validation::{check_seatable, check_seating, check_unseat, seat_request, validate_table};
