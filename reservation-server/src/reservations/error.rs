//! Reservation rule violations

use chrono::Weekday;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::utils::time::weekday_plural;

/// Why a reservation request was refused
///
/// Every variant is a client error; the message is what the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("A '{0}' property is required.")]
    MissingField(&'static str),

    #[error("{field} property must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("{field} must be in correct format: {expected}")]
    InvalidFormat {
        field: &'static str,
        expected: &'static str,
    },

    #[error("the restaurant is closed on {}", plural(.0))]
    ClosedDay(Weekday),

    #[error("reservations must be made only for future dates")]
    PastDate,

    #[error("reservations must be made between {0}")]
    OutsideHours(String),

    #[error("status cannot be {0}")]
    InvalidStatus(String),

    #[error("status {0} is unknown. must be booked, seated, finished or cancelled")]
    UnknownStatus(String),

    #[error("finished reservations cannot be updated")]
    TerminalStatus,

    #[error("only reservations with a status of booked can be edited")]
    NotBooked,

    #[error("reservation {0} does not exist")]
    NotFound(String),
}

fn plural(day: &Weekday) -> &'static str {
    weekday_plural(*day)
}

impl ReservationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingField(_) => ErrorCode::RequiredField,
            Self::InvalidType { .. } => ErrorCode::InvalidType,
            Self::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            Self::ClosedDay(_) => ErrorCode::ReservationClosedDay,
            Self::PastDate => ErrorCode::ReservationPastDate,
            Self::OutsideHours(_) => ErrorCode::ReservationOutsideHours,
            Self::InvalidStatus(_) => ErrorCode::ReservationInvalidStatus,
            Self::UnknownStatus(_) => ErrorCode::ReservationUnknownStatus,
            Self::TerminalStatus => ErrorCode::ReservationTerminalStatus,
            Self::NotBooked => ErrorCode::ReservationNotBooked,
            Self::NotFound(_) => ErrorCode::ReservationNotFound,
        }
    }
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            ReservationError::MissingField(field)
            | ReservationError::InvalidType { field, .. }
            | ReservationError::InvalidFormat { field, .. } => app.with_detail("field", field),
            ReservationError::NotFound(id) => app.with_detail("reservation_id", id),
            ReservationError::InvalidStatus(status) | ReservationError::UnknownStatus(status) => {
                app.with_detail("status", status)
            }
            _ => app,
        }
    }
}
