//! User settings for the budget tracker
//!
//! Holds display preferences and the category list new ledgers start with.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// Categories every ledger knows about before any expense is recorded
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Groceries",
    "Housing",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Savings",
    "Debt",
    "Personal",
    "Miscellaneous",
];

/// User settings for the budget tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used by the command line output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How many entries `transactions` shows when no limit is given
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Categories seeded into the known category set
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_recent_limit() -> usize {
    10
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            recent_limit: default_recent_limit(),
            default_categories: default_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            tracing::info!(path = %settings_path.display(), "wrote default settings");
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
