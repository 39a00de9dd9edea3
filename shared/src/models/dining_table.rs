//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
///
/// A table is occupied while `reservation_id` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub table_id: i64,
    pub table_name: String,
    pub capacity: i64,
    pub reservation_id: Option<i64>,
}

impl DiningTable {
    pub fn is_occupied(&self) -> bool {
        self.reservation_id.is_some()
    }
}

/// Create dining table payload
///
/// New tables always start free; seating goes through the seat flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub table_name: String,
    pub capacity: i64,
}
