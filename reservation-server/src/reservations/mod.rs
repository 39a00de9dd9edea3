//! Reservation rules
//!
//! Pure decision logic: the booking policy, the validation chain run on
//! create and full update, and the status transition guard. Nothing here
//! touches the database or HTTP.

pub mod error;
pub mod policy;
pub mod status;
pub mod validation;

pub use error::ReservationError;
pub use policy::BookingPolicy;
pub use status::{ensure_editable, parse_status, set_status};
pub use validation::{REQUIRED_FIELDS, validate_reservation};
