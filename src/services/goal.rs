//! Savings goal tracker
//!
//! Goals are sized once when created and never recalculated. Creating a
//! goal under an existing name replaces it.

use crate::error::{BudgetError, BudgetResult};
use crate::models::SavingsGoal;
use crate::storage::Storage;

/// Service for savings goal management
pub struct GoalTracker<'a> {
    storage: &'a Storage,
}

impl<'a> GoalTracker<'a> {
    /// Create a new goal tracker
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create (or silently replace) a goal and persist it
    pub fn create_goal(
        &self,
        name: &str,
        target_amount: f64,
        years: u32,
        annual_rate: f64,
    ) -> BudgetResult<SavingsGoal> {
        let goal = SavingsGoal::new(name, target_amount, years, annual_rate)?;

        if self.storage.goals.upsert(goal.clone())?.is_some() {
            tracing::debug!(name, "replaced existing savings goal");
        }
        Ok(goal)
    }

    /// All goals in creation order
    pub fn list_goals(&self) -> BudgetResult<Vec<SavingsGoal>> {
        self.storage.goals.get_all()
    }

    /// Look up a goal by name
    pub fn get_goal(&self, name: &str) -> BudgetResult<SavingsGoal> {
        self.storage
            .goals
            .get(name)?
            .ok_or_else(|| BudgetError::goal_not_found(name))
    }
}
