//! Booking policy - when the restaurant accepts reservations

use chrono::{NaiveTime, Timelike, Weekday};
use chrono_tz::Tz;

/// Operating rules applied by the validation chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    /// Zone in which reservation dates and times are read
    pub timezone: Tz,
    /// Weekday with no service
    pub closed_weekday: Weekday,
    /// Earliest bookable time (inclusive)
    pub opening_time: NaiveTime,
    /// Latest bookable time (inclusive)
    pub last_seating_time: NaiveTime,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::UTC,
            closed_weekday: Weekday::Tue,
            opening_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap_or(NaiveTime::MIN),
            last_seating_time: NaiveTime::from_hms_opt(21, 30, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

impl BookingPolicy {
    /// Hour:minute comparison, seconds ignored
    pub fn within_hours(&self, time: NaiveTime) -> bool {
        let minutes = |t: NaiveTime| t.hour() * 60 + t.minute();
        let at = minutes(time);
        at >= minutes(self.opening_time) && at <= minutes(self.last_seating_time)
    }

    /// Opening window rendered for messages ("10:30 AM and 9:30 PM")
    pub fn hours_label(&self) -> String {
        format!(
            "{} and {}",
            self.opening_time.format("%-I:%M %p"),
            self.last_seating_time.format("%-I:%M %p")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_default_policy() {
        let policy = BookingPolicy::default();
        assert_eq!(policy.closed_weekday, Weekday::Tue);
        assert_eq!(policy.opening_time, at(10, 30, 0));
        assert_eq!(policy.last_seating_time, at(21, 30, 0));
        assert_eq!(policy.hours_label(), "10:30 AM and 9:30 PM");
    }

    #[test]
    fn test_within_hours_bounds_inclusive() {
        let policy = BookingPolicy::default();
        assert!(policy.within_hours(at(10, 30, 0)));
        assert!(policy.within_hours(at(21, 30, 0)));
        assert!(policy.within_hours(at(21, 30, 59)));
        assert!(!policy.within_hours(at(10, 29, 59)));
        assert!(!policy.within_hours(at(10, 0, 0)));
        assert!(!policy.within_hours(at(21, 31, 0)));
        assert!(!policy.within_hours(at(21, 45, 0)));
    }
}
