use chrono::Weekday;
use chrono_tz::Tz;

use super::error::{Result, ServerError};
use crate::reservations::BookingPolicy;
use crate::utils::time::parse_hh_mm;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 5001 | HTTP listen port |
/// | DATABASE_URL | sqlite:reservations.db | SQLite url (`sqlite::memory:` allowed) |
/// | ENVIRONMENT | development | development / staging / production |
/// | RESTAURANT_TIMEZONE | UTC | IANA zone reservation dates are read in |
/// | CLOSED_WEEKDAY | tuesday | weekday with no service |
/// | OPENING_TIME | 10:30 | earliest bookable time |
/// | LAST_SEATING_TIME | 21:30 | latest bookable time |
/// | LOG_LEVEL | info | log level when `RUST_LOG` is unset |
/// | LOG_DIR | - | write daily rolling log files here |
/// | LOG_JSON | false | emit JSON log lines |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 RESTAURANT_TIMEZONE=America/New_York cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_url: String,
    /// development | staging | production
    pub environment: String,
    pub policy: BookingPolicy,
    pub log_level: Option<String>,
    pub log_dir: Option<String>,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 5001,
            database_url: "sqlite:reservations.db".into(),
            environment: "development".into(),
            policy: BookingPolicy::default(),
            log_level: None,
            log_dir: None,
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables take their defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_port = match get("HTTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ServerError::Config(format!("HTTP_PORT is not a port: {raw}")))?,
            None => defaults.http_port,
        };

        let mut policy = defaults.policy;
        if let Some(raw) = get("RESTAURANT_TIMEZONE") {
            policy.timezone = raw.trim().parse::<Tz>().map_err(|_| {
                ServerError::Config(format!("RESTAURANT_TIMEZONE is not an IANA zone: {raw}"))
            })?;
        }
        if let Some(raw) = get("CLOSED_WEEKDAY") {
            policy.closed_weekday = raw.trim().parse::<Weekday>().map_err(|_| {
                ServerError::Config(format!("CLOSED_WEEKDAY is not a weekday: {raw}"))
            })?;
        }
        if let Some(raw) = get("OPENING_TIME") {
            policy.opening_time = parse_hh_mm(raw.trim())
                .ok_or_else(|| ServerError::Config(format!("OPENING_TIME is not HH:MM: {raw}")))?;
        }
        if let Some(raw) = get("LAST_SEATING_TIME") {
            policy.last_seating_time = parse_hh_mm(raw.trim()).ok_or_else(|| {
                ServerError::Config(format!("LAST_SEATING_TIME is not HH:MM: {raw}"))
            })?;
        }
        if policy.opening_time > policy.last_seating_time {
            return Err(ServerError::Config(
                "OPENING_TIME must not be later than LAST_SEATING_TIME".into(),
            ));
        }

        Ok(Self {
            http_port,
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            environment: get("ENVIRONMENT").unwrap_or(defaults.environment),
            policy,
            log_level: get("LOG_LEVEL"),
            log_dir: get("LOG_DIR"),
            log_json: get("LOG_JSON").is_some_and(|v| matches!(v.trim(), "1" | "true" | "TRUE")),
        })
    }
}
