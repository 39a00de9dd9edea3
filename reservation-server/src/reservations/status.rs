//! Reservation status transitions

use serde_json::Value;
use shared::models::ReservationStatus;

use super::error::ReservationError;

/// Parse the requested status from an untrusted record
pub fn parse_status(record: &Value) -> Result<ReservationStatus, ReservationError> {
    match record.get("status") {
        None | Some(Value::Null) => Err(ReservationError::MissingField("status")),
        Some(Value::String(raw)) => raw
            .parse()
            .map_err(|_| ReservationError::UnknownStatus(raw.clone())),
        Some(other) => Err(ReservationError::UnknownStatus(other.to_string())),
    }
}

/// Move from `current` to `requested`; nothing leaves `finished`
pub fn set_status(
    current: ReservationStatus,
    requested: ReservationStatus,
) -> Result<ReservationStatus, ReservationError> {
    if current.is_terminal() {
        return Err(ReservationError::TerminalStatus);
    }
    Ok(requested)
}

/// Full edits are only allowed while `booked`
pub fn ensure_editable(current: ReservationStatus) -> Result<(), ReservationError> {
    match current {
        ReservationStatus::Booked => Ok(()),
        _ => Err(ReservationError::NotBooked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ReservationStatus::*;
    use serde_json::json;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status(&json!({ "status": "seated" })), Ok(Seated));
        assert_eq!(parse_status(&json!({ "status": "cancelled" })), Ok(Cancelled));
        assert_eq!(
            parse_status(&json!({ "status": "archived" })),
            Err(ReservationError::UnknownStatus("archived".into()))
        );
        assert_eq!(
            parse_status(&json!({ "status": 3 })),
            Err(ReservationError::UnknownStatus("3".into()))
        );
        assert_eq!(
            parse_status(&json!({})),
            Err(ReservationError::MissingField("status"))
        );
    }

    #[test]
    fn test_finished_is_terminal() {
        for requested in ReservationStatus::ALL {
            assert_eq!(
                set_status(Finished, requested),
                Err(ReservationError::TerminalStatus)
            );
        }
    }

    #[test]
    fn test_other_states_accept_any_known_status() {
        for current in [Booked, Seated, Cancelled] {
            for requested in ReservationStatus::ALL {
                assert_eq!(set_status(current, requested), Ok(requested));
            }
        }
    }

    #[test]
    fn test_only_booked_is_editable() {
        assert_eq!(ensure_editable(Booked), Ok(()));
        for current in [Seated, Finished, Cancelled] {
            assert_eq!(ensure_editable(current), Err(ReservationError::NotBooked));
        }
    }
}
