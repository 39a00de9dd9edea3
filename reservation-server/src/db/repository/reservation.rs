//! Reservation Repository

use super::{RepoError, RepoResult};
use chrono::{NaiveDate, NaiveTime};
use shared::models::{Reservation, ReservationCreate, ReservationStatus};
use shared::util::{normalize_mobile_number, now_millis};
use sqlx::{Executor, Sqlite, SqlitePool};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Prefixes a query tail with the full column list; queries stay `&'static str`
macro_rules! with_columns {
    ($head:literal, $tail:literal) => {
        concat!(
            $head,
            " reservation_id, first_name, last_name, mobile_number, reservation_date, \
             reservation_time, people, status, created_at, updated_at ",
            $tail
        )
    };
}

/// Stored form: dates and times as zero-padded text so they sort correctly
#[derive(Debug, sqlx::FromRow)]
struct ReservationRow {
    reservation_id: i64,
    first_name: String,
    last_name: String,
    mobile_number: String,
    reservation_date: String,
    reservation_time: String,
    people: i64,
    status: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = RepoError;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        let corrupt = |what: &str| {
            RepoError::Corrupt(format!("reservation {}: bad {what}", row.reservation_id))
        };
        let reservation_date = NaiveDate::parse_from_str(&row.reservation_date, DATE_FORMAT)
            .map_err(|_| corrupt("reservation_date"))?;
        let reservation_time = NaiveTime::parse_from_str(&row.reservation_time, TIME_FORMAT)
            .map_err(|_| corrupt("reservation_time"))?;
        let status = row
            .status
            .parse::<ReservationStatus>()
            .map_err(|_| corrupt("status"))?;

        Ok(Reservation {
            reservation_id: row.reservation_id,
            first_name: row.first_name,
            last_name: row.last_name,
            mobile_number: row.mobile_number,
            reservation_date,
            reservation_time,
            people: row.people,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_models(rows: Vec<ReservationRow>) -> RepoResult<Vec<Reservation>> {
    rows.into_iter().map(Reservation::try_from).collect()
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> RepoResult<Option<Reservation>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, ReservationRow>(with_columns!(
        "SELECT",
        "FROM reservation WHERE reservation_id = ?"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;
    row.map(Reservation::try_from).transpose()
}

/// Reservations on `date` that are not finished, earliest first
pub async fn list_by_date(pool: &SqlitePool, date: NaiveDate) -> RepoResult<Vec<Reservation>> {
    let rows = sqlx::query_as::<_, ReservationRow>(with_columns!(
        "SELECT",
        "FROM reservation \
         WHERE reservation_date = ? AND status != 'finished' \
         ORDER BY reservation_time, reservation_id"
    ))
    .bind(date.format(DATE_FORMAT).to_string())
    .fetch_all(pool)
    .await?;
    into_models(rows)
}

/// Reservations whose mobile number contains `mobile_number`, formatting ignored
///
/// A search with nothing left after normalization matches nothing.
pub async fn search_by_mobile(
    pool: &SqlitePool,
    mobile_number: &str,
) -> RepoResult<Vec<Reservation>> {
    let needle = normalize_mobile_number(mobile_number);
    if needle.is_empty() {
        return Ok(Vec::new());
    }
    let rows = sqlx::query_as::<_, ReservationRow>(with_columns!(
        "SELECT",
        "FROM reservation \
         WHERE instr(replace(replace(replace(replace(mobile_number, '(', ''), ')', ''), '-', ''), ' ', ''), ?) > 0 \
         ORDER BY reservation_date, reservation_time, reservation_id"
    ))
    .bind(needle)
    .fetch_all(pool)
    .await?;
    into_models(rows)
}

/// Insert a reservation; status always starts as `booked`
pub async fn create(pool: &SqlitePool, data: ReservationCreate) -> RepoResult<Reservation> {
    let now = now_millis();
    let row = sqlx::query_as::<_, ReservationRow>(with_columns!(
        "INSERT INTO reservation \
         (first_name, last_name, mobile_number, reservation_date, reservation_time, people, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING",
        ""
    ))
    .bind(data.first_name)
    .bind(data.last_name)
    .bind(data.mobile_number)
    .bind(data.reservation_date.format(DATE_FORMAT).to_string())
    .bind(data.reservation_time.format(TIME_FORMAT).to_string())
    .bind(data.people)
    .bind(ReservationStatus::Booked.as_str())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Reservation::try_from(row)
}

/// Replace every editable field; status is left alone
pub async fn update(pool: &SqlitePool, id: i64, data: ReservationCreate) -> RepoResult<Reservation> {
    let row = sqlx::query_as::<_, ReservationRow>(with_columns!(
        "UPDATE reservation SET first_name = ?, last_name = ?, mobile_number = ?, \
         reservation_date = ?, reservation_time = ?, people = ?, updated_at = ? \
         WHERE reservation_id = ? RETURNING",
        ""
    ))
    .bind(data.first_name)
    .bind(data.last_name)
    .bind(data.mobile_number)
    .bind(data.reservation_date.format(DATE_FORMAT).to_string())
    .bind(data.reservation_time.format(TIME_FORMAT).to_string())
    .bind(data.people)
    .bind(now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Reservation {id}")))?;
    Reservation::try_from(row)
}

pub async fn update_status<'e, E>(
    executor: E,
    id: i64,
    status: ReservationStatus,
) -> RepoResult<Reservation>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, ReservationRow>(with_columns!(
        "UPDATE reservation SET status = ?, updated_at = ? WHERE reservation_id = ? RETURNING",
        ""
    ))
    .bind(status.as_str())
    .bind(now_millis())
    .bind(id)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Reservation {id}")))?;
    Reservation::try_from(row)
}
