use std::sync::Arc;
use std::time::Instant;

use sqlx::SqlitePool;

use super::{Config, Result};
use crate::db::DbService;
use crate::reservations::BookingPolicy;
use crate::utils::{Clock, SystemClock};

/// Server state - shared by every request
///
/// Cloning is cheap: the pool, the clock and the config are all behind `Arc`.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | loaded configuration (immutable) |
/// | db | SQLite pool wrapper |
/// | clock | source of "now" for the validation chain |
/// | started_at | process start, for uptime |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub clock: Arc<dyn Clock>,
    pub started_at: Instant,
}

impl ServerState {
    /// Open the configured database and wire up the system clock
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url).await?;
        Ok(Self::new(config.clone(), db, Arc::new(SystemClock)))
    }

    /// Assemble state from parts; tests pass an in-memory database and a fixed clock
    pub fn new(config: Config, db: DbService, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            db,
            clock,
            started_at: Instant::now(),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    pub fn policy(&self) -> &BookingPolicy {
        &self.config.policy
    }
}
