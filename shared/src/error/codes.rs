//! Unified error codes for the reservation service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors (request shape, field presence, formats)
//! - 4xxx: Reservation errors (booking rules, status lifecycle)
//! - 7xxx: Table errors (seating)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can switch on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value has the wrong type
    InvalidType = 8,

    // ==================== 4xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 4001,
    /// Requested date falls on the closed weekday
    ReservationClosedDay = 4002,
    /// Requested date/time is in the past
    ReservationPastDate = 4003,
    /// Requested time is outside service hours
    ReservationOutsideHours = 4004,
    /// Status other than booked supplied on create/edit
    ReservationInvalidStatus = 4005,
    /// Status value is not one of the known statuses
    ReservationUnknownStatus = 4006,
    /// Reservation is finished and cannot change
    ReservationTerminalStatus = 4007,
    /// Reservation is no longer booked and cannot be edited
    ReservationNotBooked = 4008,
    /// Reservation is already seated
    ReservationAlreadySeated = 4009,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is occupied
    TableOccupied = 7002,
    /// Table is not occupied
    TableNotOccupied = 7003,
    /// Party is larger than table capacity
    TableCapacityExceeded = 7004,
    /// Table name is too short
    TableInvalidName = 7005,
    /// Table capacity is not a positive integer
    TableInvalidCapacity = 7006,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::InvalidType => "Value has the wrong type",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::ReservationClosedDay => "The restaurant is closed on that day",
            ErrorCode::ReservationPastDate => "Reservations must be made for future dates",
            ErrorCode::ReservationOutsideHours => "Reservation time is outside service hours",
            ErrorCode::ReservationInvalidStatus => "Reservations must be created as booked",
            ErrorCode::ReservationUnknownStatus => "Reservation status is unknown",
            ErrorCode::ReservationTerminalStatus => "Finished reservations cannot be updated",
            ErrorCode::ReservationNotBooked => {
                "Only reservations with a status of booked can be edited"
            }
            ErrorCode::ReservationAlreadySeated => "Reservation is already seated",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableOccupied => "Table is occupied",
            ErrorCode::TableNotOccupied => "Table is not occupied",
            ErrorCode::TableCapacityExceeded => "Party size exceeds table capacity",
            ErrorCode::TableInvalidName => "Table name must be at least 2 characters",
            ErrorCode::TableInvalidCapacity => "Table capacity must be a positive integer",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::InvalidType),

            // Reservation
            4001 => Ok(ErrorCode::ReservationNotFound),
            4002 => Ok(ErrorCode::ReservationClosedDay),
            4003 => Ok(ErrorCode::ReservationPastDate),
            4004 => Ok(ErrorCode::ReservationOutsideHours),
            4005 => Ok(ErrorCode::ReservationInvalidStatus),
            4006 => Ok(ErrorCode::ReservationUnknownStatus),
            4007 => Ok(ErrorCode::ReservationTerminalStatus),
            4008 => Ok(ErrorCode::ReservationNotBooked),
            4009 => Ok(ErrorCode::ReservationAlreadySeated),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableOccupied),
            7003 => Ok(ErrorCode::TableNotOccupied),
            7004 => Ok(ErrorCode::TableCapacityExceeded),
            7005 => Ok(ErrorCode::TableInvalidName),
            7006 => Ok(ErrorCode::TableInvalidCapacity),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ReservationNotFound.code(), 4001);
        assert_eq!(ErrorCode::ReservationNotBooked.code(), 4008);
        assert_eq!(ErrorCode::TableOccupied.code(), 7002);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_u16() {
        assert_eq!(ErrorCode::try_from(3), Ok(ErrorCode::NotFound));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(
            ErrorCode::try_from(4007),
            Ok(ErrorCode::ReservationTerminalStatus)
        );
        assert_eq!(ErrorCode::try_from(7004), Ok(ErrorCode::TableCapacityExceeded));
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::ReservationClosedDay).unwrap();
        assert_eq!(json, "4002");

        let code: ErrorCode = serde_json::from_str("7003").unwrap();
        assert_eq!(code, ErrorCode::TableNotOccupied);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::ReservationPastDate.to_string(), "4003");
    }
}
