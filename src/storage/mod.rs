//! Storage layer for the budget tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod goals;
pub mod ledger;

pub use file_io::{read_json, read_json_or_default, write_json_atomic};
pub use goals::GoalRepository;
pub use ledger::LedgerRepository;

use crate::config::paths::BudgetPaths;
use crate::config::settings::Settings;
use crate::error::BudgetError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BudgetPaths,
    pub ledger: LedgerRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetPaths, settings: &Settings) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(
                paths.ledger_file(),
                settings.default_categories.clone(),
            ),
            goals: GoalRepository::new(paths.goals_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BudgetError> {
        self.ledger.load()?;
        self.goals.load()?;
        Ok(())
    }
}
