//! Budget Tracker - personal income/expense ledger with savings planning
//!
//! This library records income and expenses, summarizes them over relative
//! periods, derives simple spending advice, and sizes the monthly deposits
//! needed to reach savings goals.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, ledger, periods, summaries, savings goals
//! - `projection`: Compound-interest math
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal formatting used by the command line
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::{BudgetPaths, Settings};
//! use budget_tracker::models::Period;
//! use budget_tracker::services::{LedgerService, SummaryService, SystemClock};
//! use budget_tracker::storage::Storage;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! let clock = SystemClock;
//! LedgerService::new(&storage, &clock).record_income(3000.0, "Salary", None)?;
//! let summary = SummaryService::new(&storage, &clock).summary(Period::Month)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod projection;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// Defaults to warnings from this crate; `RUST_LOG` adds or overrides
/// directives.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("budget_tracker=warn"));

        // Another subscriber may already be installed (e.g. by a host application)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
