//! Table rule violations

use shared::error::{AppError, ErrorCode};
use shared::models::ReservationStatus;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("A '{0}' property is required.")]
    MissingField(&'static str),

    #[error("table_name must be at least 2 characters long")]
    InvalidTableName,

    #[error("capacity must be a whole number of at least 1")]
    InvalidCapacity,

    #[error("reservation_id must be a number")]
    InvalidReservationId,

    #[error("table {0} does not exist")]
    TableNotFound(String),

    #[error("table {table_id} seats {capacity}, party of {people} does not fit")]
    CapacityExceeded {
        table_id: i64,
        capacity: i64,
        people: i64,
    },

    #[error("table {0} is occupied")]
    TableOccupied(i64),

    #[error("table {0} is not occupied")]
    TableNotOccupied(i64),

    #[error("reservation {0} is already seated")]
    AlreadySeated(i64),

    #[error("reservation {reservation_id} is {status} and cannot be seated")]
    NotSeatable {
        reservation_id: i64,
        status: ReservationStatus,
    },
}

impl TableError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingField(_) => ErrorCode::RequiredField,
            Self::InvalidTableName => ErrorCode::TableInvalidName,
            Self::InvalidCapacity => ErrorCode::TableInvalidCapacity,
            Self::InvalidReservationId => ErrorCode::InvalidType,
            Self::TableNotFound(_) => ErrorCode::TableNotFound,
            Self::CapacityExceeded { .. } => ErrorCode::TableCapacityExceeded,
            Self::TableOccupied(_) => ErrorCode::TableOccupied,
            Self::TableNotOccupied(_) => ErrorCode::TableNotOccupied,
            Self::AlreadySeated(_) => ErrorCode::ReservationAlreadySeated,
            Self::NotSeatable { .. } => ErrorCode::ReservationNotBooked,
        }
    }
}

impl From<TableError> for AppError {
    fn from(err: TableError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            TableError::MissingField(field) => app.with_detail("field", field),
            TableError::InvalidTableName => app.with_detail("field", "table_name"),
            TableError::InvalidCapacity => app.with_detail("field", "capacity"),
            TableError::InvalidReservationId => app.with_detail("field", "reservation_id"),
            TableError::TableNotFound(id) => app.with_detail("table_id", id),
            TableError::CapacityExceeded {
                capacity, people, ..
            } => app.with_detail("capacity", capacity).with_detail("people", people),
            _ => app,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let err: AppError = TableError::TableNotFound("3".into()).into();
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "table 3 does not exist");

        let err: AppError = TableError::TableOccupied(3).into();
        assert_eq!(err.code, ErrorCode::TableOccupied);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);

        let err: AppError = TableError::CapacityExceeded {
            table_id: 1,
            capacity: 2,
            people: 6,
        }
        .into();
        let details = err.details.unwrap();
        assert_eq!(details["capacity"], 2);
        assert_eq!(details["people"], 6);
    }
}
