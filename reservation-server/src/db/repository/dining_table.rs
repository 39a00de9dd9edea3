//! Dining Table Repository

use super::{RepoError, RepoResult, reservation};
use shared::models::{DiningTable, DiningTableCreate, ReservationStatus};
use shared::util::now_millis;
use sqlx::{Executor, Sqlite, SqlitePool};

#[derive(Debug, sqlx::FromRow)]
struct DiningTableRow {
    table_id: i64,
    table_name: String,
    capacity: i64,
    reservation_id: Option<i64>,
}

impl From<DiningTableRow> for DiningTable {
    fn from(row: DiningTableRow) -> Self {
        Self {
            table_id: row.table_id,
            table_name: row.table_name,
            capacity: row.capacity,
            reservation_id: row.reservation_id,
        }
    }
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<DiningTable>> {
    let rows = sqlx::query_as::<_, DiningTableRow>(
        "SELECT table_id, table_name, capacity, reservation_id FROM dining_table ORDER BY table_name, table_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(DiningTable::from).collect())
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> RepoResult<Option<DiningTable>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, DiningTableRow>(
        "SELECT table_id, table_name, capacity, reservation_id FROM dining_table WHERE table_id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(row.map(DiningTable::from))
}

pub async fn create(pool: &SqlitePool, data: DiningTableCreate) -> RepoResult<DiningTable> {
    let now = now_millis();
    let row = sqlx::query_as::<_, DiningTableRow>(
        "INSERT INTO dining_table (table_name, capacity, created_at, updated_at) \
         VALUES (?, ?, ?, ?) RETURNING table_id, table_name, capacity, reservation_id",
    )
    .bind(data.table_name)
    .bind(data.capacity)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row.into())
}

/// Result of a seat attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatOutcome {
    Seated(DiningTable),
    /// The table already holds a reservation
    TableTaken,
    /// The reservation is missing or no longer `booked`
    ReservationTaken,
}

/// Seat a booked reservation at a free table
///
/// Both writes happen in one transaction and both are guarded, so a table
/// holds at most one reservation and a reservation sits at most one table.
/// Nothing is written unless both guards pass.
pub async fn seat(pool: &SqlitePool, table_id: i64, reservation_id: i64) -> RepoResult<SeatOutcome> {
    let mut tx = pool.begin().await?;

    let claimed = sqlx::query(
        "UPDATE dining_table SET reservation_id = ?, updated_at = ? \
         WHERE table_id = ? AND reservation_id IS NULL",
    )
    .bind(reservation_id)
    .bind(now_millis())
    .bind(table_id)
    .execute(&mut *tx)
    .await?;
    if claimed.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(SeatOutcome::TableTaken);
    }

    let moved = sqlx::query(
        "UPDATE reservation SET status = ?, updated_at = ? \
         WHERE reservation_id = ? AND status = ?",
    )
    .bind(ReservationStatus::Seated.as_str())
    .bind(now_millis())
    .bind(reservation_id)
    .bind(ReservationStatus::Booked.as_str())
    .execute(&mut *tx)
    .await?;
    if moved.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(SeatOutcome::ReservationTaken);
    }

    let table = find_by_id(&mut *tx, table_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {table_id}")))?;

    tx.commit().await?;
    Ok(SeatOutcome::Seated(table))
}

/// Free an occupied table and finish its reservation, in one transaction
pub async fn finish(pool: &SqlitePool, table_id: i64, reservation_id: i64) -> RepoResult<DiningTable> {
    let mut tx = pool.begin().await?;

    let freed = sqlx::query(
        "UPDATE dining_table SET reservation_id = NULL, updated_at = ? \
         WHERE table_id = ? AND reservation_id = ?",
    )
    .bind(now_millis())
    .bind(table_id)
    .bind(reservation_id)
    .execute(&mut *tx)
    .await?;
    if freed.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Table {table_id} seating reservation {reservation_id}"
        )));
    }

    reservation::update_status(&mut *tx, reservation_id, ReservationStatus::Finished).await?;
    let table = find_by_id(&mut *tx, table_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {table_id}")))?;

    tx.commit().await?;
    Ok(table)
}
