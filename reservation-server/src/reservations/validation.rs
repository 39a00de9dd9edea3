//! Reservation validation chain
//!
//! Each stage inspects the raw JSON record and either passes or reports the
//! first problem it finds. Stages run in a fixed order and the chain stops at
//! the first failure:
//!
//! 1. required fields present
//! 2. `people` is a positive whole number
//! 3. `reservation_date` is `YYYY-MM-DD`
//! 4. `reservation_time` is `H[H]:MM` or `H[H]:MM:SS`
//! 5. not on the closed weekday
//! 6. not in the past
//! 7. within opening hours
//! 8. `status`, if given, is `booked`

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde_json::Value;
use shared::models::{ReservationCreate, ReservationStatus};

use super::error::ReservationError;
use super::policy::BookingPolicy;
use crate::utils::time::local_to_utc;

/// Fields every reservation must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 6] = [
    "first_name",
    "last_name",
    "mobile_number",
    "reservation_date",
    "reservation_time",
    "people",
];

type ValidationResult<T> = Result<T, ReservationError>;

/// Run the whole chain and produce a create payload
pub fn validate_reservation(
    record: &Value,
    policy: &BookingPolicy,
    now: DateTime<Utc>,
) -> ValidationResult<ReservationCreate> {
    require_fields(record)?;
    let people = people(record)?;
    let date = reservation_date(record)?;
    let time = reservation_time(record)?;
    not_closed_day(date, policy)?;
    not_in_past(date, time, policy, now)?;
    within_hours(time, policy)?;
    status_is_booked(record)?;

    Ok(ReservationCreate {
        first_name: text(record, "first_name")?,
        last_name: text(record, "last_name")?,
        mobile_number: text(record, "mobile_number")?,
        reservation_date: date,
        reservation_time: time,
        people,
    })
}

/// A value counts as present unless it is absent, `null`, or blank text
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

pub fn require_fields(record: &Value) -> ValidationResult<()> {
    match REQUIRED_FIELDS
        .into_iter()
        .find(|field| !is_present(record.get(field)))
    {
        Some(field) => Err(ReservationError::MissingField(field)),
        None => Ok(()),
    }
}

/// `people` must be a JSON number holding a whole value of at least 1
pub fn people(record: &Value) -> ValidationResult<i64> {
    let invalid = ReservationError::InvalidType {
        field: "people",
        expected: "a number",
    };
    let Some(Value::Number(n)) = record.get("people") else {
        return Err(invalid);
    };

    let whole = n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    });

    match whole {
        Some(people) if people >= 1 => Ok(people),
        _ => Err(invalid),
    }
}

pub fn reservation_date(record: &Value) -> ValidationResult<NaiveDate> {
    let invalid = ReservationError::InvalidFormat {
        field: "reservation_date",
        expected: "YYYY-MM-DD",
    };
    record
        .get("reservation_date")
        .and_then(Value::as_str)
        .and_then(parse_iso_date)
        .ok_or(invalid)
}

pub fn reservation_time(record: &Value) -> ValidationResult<NaiveTime> {
    let invalid = ReservationError::InvalidFormat {
        field: "reservation_time",
        expected: "HH:MM:SS",
    };
    record
        .get("reservation_time")
        .and_then(Value::as_str)
        .and_then(parse_clock_time)
        .ok_or(invalid)
}

pub fn not_closed_day(date: NaiveDate, policy: &BookingPolicy) -> ValidationResult<()> {
    if date.weekday() == policy.closed_weekday {
        return Err(ReservationError::ClosedDay(policy.closed_weekday));
    }
    Ok(())
}

pub fn not_in_past(
    date: NaiveDate,
    time: NaiveTime,
    policy: &BookingPolicy,
    now: DateTime<Utc>,
) -> ValidationResult<()> {
    if local_to_utc(date, time, policy.timezone) < now {
        return Err(ReservationError::PastDate);
    }
    Ok(())
}

pub fn within_hours(time: NaiveTime, policy: &BookingPolicy) -> ValidationResult<()> {
    if !policy.within_hours(time) {
        return Err(ReservationError::OutsideHours(policy.hours_label()));
    }
    Ok(())
}

/// A supplied `status` must be `booked`; absent or `null` passes
pub fn status_is_booked(record: &Value) -> ValidationResult<()> {
    match record.get("status") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(s)) if s == ReservationStatus::Booked.as_str() => Ok(()),
        Some(Value::String(s)) => Err(ReservationError::InvalidStatus(s.clone())),
        Some(other) => Err(ReservationError::InvalidStatus(other.to_string())),
    }
}

fn text(record: &Value, field: &'static str) -> ValidationResult<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .ok_or(ReservationError::InvalidType {
            field,
            expected: "a string",
        })
}

/// Strict `YYYY-MM-DD`, rejecting unpadded parts and impossible dates
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `H[H]:MM` or `H[H]:MM:SS`, hour 0-23, minute and second 0-59
fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let parts: Vec<&str> = raw.split(':').collect();
    let (hour, minute, second) = match parts.as_slice() {
        [h, m] => (*h, *m, "00"),
        [h, m, s] => (*h, *m, *s),
        _ => return None,
    };

    let number = |part: &str, widths: std::ops::RangeInclusive<usize>| -> Option<u32> {
        if !widths.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    };

    let hour = number(hour, 1..=2).filter(|h| *h <= 23)?;
    let minute = number(minute, 2..=2).filter(|m| *m <= 59)?;
    let second = number(second, 2..=2).filter(|s| *s <= 59)?;
    NaiveTime::from_hms_opt(hour, minute, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};
    use serde_json::json;

    // Wednesday 2030-01-02 09:00 UTC
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 2, 9, 0, 0).unwrap()
    }

    fn valid() -> Value {
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "mobile_number": "555-1212",
            "reservation_date": "2030-01-03",
            "reservation_time": "12:00",
            "people": 2
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut record = valid();
        record[field] = value;
        record
    }

    fn check(record: &Value) -> ValidationResult<ReservationCreate> {
        validate_reservation(record, &BookingPolicy::default(), now())
    }

    #[test]
    fn test_valid_record_passes() {
        let created = check(&valid()).unwrap();
        assert_eq!(created.first_name, "Ada");
        assert_eq!(created.people, 2);
        assert_eq!(created.reservation_date, NaiveDate::from_ymd_opt(2030, 1, 3).unwrap());
        assert_eq!(created.reservation_time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn test_missing_field_reports_first_in_order() {
        for field in REQUIRED_FIELDS {
            let mut record = valid();
            record.as_object_mut().unwrap().remove(field);
            assert_eq!(check(&record), Err(ReservationError::MissingField(field)));
        }

        let record = json!({ "people": 2, "mobile_number": "1" });
        assert_eq!(check(&record), Err(ReservationError::MissingField("first_name")));
    }

    #[test]
    fn test_null_and_blank_count_as_missing() {
        assert_eq!(
            check(&with("last_name", Value::Null)),
            Err(ReservationError::MissingField("last_name"))
        );
        assert_eq!(
            check(&with("mobile_number", json!(""))),
            Err(ReservationError::MissingField("mobile_number"))
        );
        assert_eq!(
            check(&with("first_name", json!("   "))),
            Err(ReservationError::MissingField("first_name"))
        );
    }

    #[test]
    fn test_people_must_be_number() {
        let expected = Err(ReservationError::InvalidType {
            field: "people",
            expected: "a number",
        });
        assert_eq!(check(&with("people", json!("4"))), expected);
        assert_eq!(check(&with("people", json!(0))), expected);
        assert_eq!(check(&with("people", json!(-3))), expected);
        assert_eq!(check(&with("people", json!(2.5))), expected);
        assert_eq!(check(&with("people", json!(true))), expected);
        assert_eq!(check(&with("people", json!(3.0))).unwrap().people, 3);
    }

    #[test]
    fn test_people_checked_before_date() {
        let mut record = with("people", json!("4"));
        record["reservation_date"] = json!("not a date");
        assert!(matches!(check(&record), Err(ReservationError::InvalidType { .. })));
    }

    #[test]
    fn test_date_format() {
        for bad in ["2023-1-5", "2030/01/03", "03-01-2030", "2030-02-30", "2030-01-03T12:00"] {
            assert_eq!(
                check(&with("reservation_date", json!(bad))),
                Err(ReservationError::InvalidFormat {
                    field: "reservation_date",
                    expected: "YYYY-MM-DD",
                }),
                "{bad}"
            );
        }
        assert!(matches!(
            check(&with("reservation_date", json!(20300103))),
            Err(ReservationError::InvalidFormat { field: "reservation_date", .. })
        ));
    }

    #[test]
    fn test_time_format() {
        for bad in ["12", "12:0", "24:00", "12:60", "12:00:60", "noon", "12:00:00:00", "-1:30"] {
            assert!(
                matches!(
                    check(&with("reservation_time", json!(bad))),
                    Err(ReservationError::InvalidFormat { field: "reservation_time", .. })
                ),
                "{bad}"
            );
        }
        assert_eq!(parse_clock_time("12:00"), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(parse_clock_time("12:00:30"), NaiveTime::from_hms_opt(12, 0, 30));
        assert_eq!(parse_clock_time("9:45"), NaiveTime::from_hms_opt(9, 45, 0));
    }

    #[test]
    fn test_closed_day() {
        // 2030-01-08 is a Tuesday
        assert_eq!(
            check(&with("reservation_date", json!("2030-01-08"))),
            Err(ReservationError::ClosedDay(Weekday::Tue))
        );

        let policy = BookingPolicy {
            closed_weekday: Weekday::Mon,
            ..BookingPolicy::default()
        };
        let record = with("reservation_date", json!("2030-01-08"));
        assert!(validate_reservation(&record, &policy, now()).is_ok());
    }

    #[test]
    fn test_closed_day_checked_before_past() {
        // 2029-01-02 is a Tuesday in the past
        assert_eq!(
            check(&with("reservation_date", json!("2029-01-02"))),
            Err(ReservationError::ClosedDay(Weekday::Tue))
        );
    }

    #[test]
    fn test_past_date() {
        assert_eq!(
            check(&with("reservation_date", json!("2029-12-31"))),
            Err(ReservationError::PastDate)
        );
        // earlier today
        let mut record = with("reservation_date", json!("2030-01-02"));
        record["reservation_time"] = json!("08:59");
        assert_eq!(check(&record), Err(ReservationError::PastDate));
    }

    #[test]
    fn test_past_date_uses_restaurant_zone() {
        // 2030-01-02 11:00 in New York is 16:00 UTC, after the 09:00 UTC clock
        let policy = BookingPolicy {
            timezone: chrono_tz::America::New_York,
            ..BookingPolicy::default()
        };
        let mut record = with("reservation_date", json!("2030-01-02"));
        record["reservation_time"] = json!("11:00");
        assert!(validate_reservation(&record, &policy, now()).is_ok());

        // same wall-clock time in Tokyo is 02:00 UTC, already past
        let policy = BookingPolicy {
            timezone: chrono_tz::Asia::Tokyo,
            ..BookingPolicy::default()
        };
        assert_eq!(
            validate_reservation(&record, &policy, now()),
            Err(ReservationError::PastDate)
        );
    }

    #[test]
    fn test_opening_hours() {
        for bad in ["10:00", "21:45", "10:29:59", "23:00", "0:15"] {
            assert_eq!(
                check(&with("reservation_time", json!(bad))),
                Err(ReservationError::OutsideHours("10:30 AM and 9:30 PM".into())),
                "{bad}"
            );
        }
        for good in ["10:30", "21:30", "21:30:45", "15:15:00"] {
            assert!(check(&with("reservation_time", json!(good))).is_ok(), "{good}");
        }
    }

    #[test]
    fn test_status_must_be_booked() {
        assert!(check(&with("status", json!("booked"))).is_ok());
        assert!(check(&with("status", Value::Null)).is_ok());
        assert_eq!(
            check(&with("status", json!("seated"))),
            Err(ReservationError::InvalidStatus("seated".into()))
        );
        assert_eq!(
            check(&with("status", json!("finished"))),
            Err(ReservationError::InvalidStatus("finished".into()))
        );
    }

    #[test]
    fn test_text_fields_must_be_strings() {
        assert_eq!(
            check(&with("mobile_number", json!(5551212))),
            Err(ReservationError::InvalidType {
                field: "mobile_number",
                expected: "a string",
            })
        );
    }

    #[test]
    fn test_text_fields_trimmed() {
        let created = check(&with("first_name", json!("  Ada "))).unwrap();
        assert_eq!(created.first_name, "Ada");
    }
}
