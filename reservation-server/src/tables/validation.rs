//! Table validation

use serde_json::Value;
use shared::models::{DiningTable, DiningTableCreate, Reservation, ReservationStatus};

use super::error::TableError;

const MIN_NAME_LEN: usize = 2;

/// Validate a new table record
///
/// `table_name` comes first, then `capacity`. Any other field is ignored;
/// a table is always created free.
pub fn validate_table(record: &Value) -> Result<DiningTableCreate, TableError> {
    let table_name = match record.get("table_name") {
        None | Some(Value::Null) => return Err(TableError::MissingField("table_name")),
        Some(Value::String(name)) if name.trim().is_empty() => {
            return Err(TableError::MissingField("table_name"));
        }
        Some(Value::String(name)) if name.trim().chars().count() >= MIN_NAME_LEN => {
            name.trim().to_string()
        }
        Some(_) => return Err(TableError::InvalidTableName),
    };

    let capacity = match record.get("capacity") {
        None | Some(Value::Null) => return Err(TableError::MissingField("capacity")),
        Some(value) => value
            .as_i64()
            .filter(|c| *c >= 1)
            .ok_or(TableError::InvalidCapacity)?,
    };

    Ok(DiningTableCreate {
        table_name,
        capacity,
    })
}

/// Extract the `reservation_id` a seat request names
pub fn seat_request(record: &Value) -> Result<i64, TableError> {
    match record.get("reservation_id") {
        None | Some(Value::Null) => Err(TableError::MissingField("reservation_id")),
        Some(value) => value.as_i64().ok_or(TableError::InvalidReservationId),
    }
}

/// Preconditions for seating `reservation` at `table`
///
/// Checked in order: capacity, occupancy, reservation status.
pub fn check_seating(table: &DiningTable, reservation: &Reservation) -> Result<(), TableError> {
    if reservation.people > table.capacity {
        return Err(TableError::CapacityExceeded {
            table_id: table.table_id,
            capacity: table.capacity,
            people: reservation.people,
        });
    }
    if table.is_occupied() {
        return Err(TableError::TableOccupied(table.table_id));
    }
    check_seatable(reservation)
}

/// Only `booked` reservations can be seated
pub fn check_seatable(reservation: &Reservation) -> Result<(), TableError> {
    match reservation.status {
        ReservationStatus::Booked => Ok(()),
        ReservationStatus::Seated => Err(TableError::AlreadySeated(reservation.reservation_id)),
        status => Err(TableError::NotSeatable {
            reservation_id: reservation.reservation_id,
            status,
        }),
    }
}

/// A table can only be freed while occupied; returns the seated reservation
pub fn check_unseat(table: &DiningTable) -> Result<i64, TableError> {
    table
        .reservation_id
        .ok_or(TableError::TableNotOccupied(table.table_id))
}
