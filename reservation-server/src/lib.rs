//! Reservation Server - restaurant reservation and seating API
//!
//! # Module layout
//!
//! ```text
//! reservation-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── reservations/  # booking policy, validation chain, status guard
//! ├── tables/        # table validation, seating preconditions
//! ├── db/            # SQLite pool, migrations, repositories
//! ├── api/           # HTTP handlers
//! ├── routes/        # router assembly and tower layers
//! ├── middleware/    # request logging
//! └── utils/         # clock, logger, time helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod reservations;
pub mod routes;
pub mod tables;
pub mod utils;

pub use core::{Config, Server, ServerError, ServerState};
pub use routes::{build_app, build_router};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::{Clock, FixedClock, SystemClock};

pub use utils::logger::init_logger_with_file;

/// Start logging as configured (`RUST_LOG` still wins over `LOG_LEVEL`)
pub fn setup_logging(config: &Config) {
    init_logger_with_file(
        config.log_level.as_deref(),
        config.log_json,
        config.log_dir.as_deref(),
    );
}
