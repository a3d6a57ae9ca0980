//! Savings goal repository
//!
//! Handles persistence of savings goals to goals.json. Goals keep the order
//! they were first created in; re-creating a name replaces it in place.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::SavingsGoal;

use super::file_io::{read_json_or_default, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    #[serde(default)]
    goals: Vec<SavingsGoal>,
}

/// Repository for savings goals
pub struct GoalRepository {
    path: PathBuf,
    goals: RwLock<Vec<SavingsGoal>>,
}

impl GoalRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            goals: RwLock::new(Vec::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: GoalData = read_json_or_default(&self.path);

        let mut goals = self
            .goals
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *goals = file_data.goals;

        Ok(())
    }

    /// Insert or replace a goal by name and persist
    ///
    /// Returns the goal it replaced, if any.
    pub fn upsert(&self, goal: SavingsGoal) -> Result<Option<SavingsGoal>, BudgetError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let previous = match goals.iter().position(|g| g.name == goal.name) {
            Some(index) => Some(std::mem::replace(&mut goals[index], goal.clone())),
            None => {
                goals.push(goal.clone());
                None
            }
        };

        let file_data = GoalData {
            goals: goals.clone(),
        };
        if let Err(e) = write_json_atomic(&self.path, &file_data) {
            match &previous {
                Some(old) => {
                    if let Some(slot) = goals.iter_mut().find(|g| g.name == goal.name) {
                        *slot = old.clone();
                    }
                }
                None => {
                    goals.pop();
                }
            }
            return Err(e);
        }

        Ok(previous)
    }

    /// Get a goal by name
    pub fn get(&self, name: &str) -> Result<Option<SavingsGoal>, BudgetError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.iter().find(|g| g.name == name).cloned())
    }

    /// Get all goals in creation order
    pub fn get_all(&self) -> Result<Vec<SavingsGoal>, BudgetError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn goal(name: &str, target: f64) -> SavingsGoal {
        SavingsGoal::new(name, target, 5, 0.05).unwrap()
    }

    #[test]
    fn test_upsert_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GoalRepository::new(temp_dir.path().join("goals.json"));

        assert!(repo.upsert(goal("House", 50000.0)).unwrap().is_none());

        let retrieved = repo.get("House").unwrap().unwrap();
        assert_eq!(retrieved.target_amount, 50000.0);
        assert!(repo.get("Boat").unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GoalRepository::new(temp_dir.path().join("goals.json"));

        repo.upsert(goal("House", 50000.0)).unwrap();
        repo.upsert(goal("Car", 8000.0)).unwrap();
        let replaced = repo.upsert(goal("House", 60000.0)).unwrap();

        assert_eq!(replaced.unwrap().target_amount, 50000.0);
        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "House");
        assert_eq!(all[0].target_amount, 60000.0);
        assert_eq!(all[1].name, "Car");
    }

    #[test]
    fn test_reload_keeps_creation_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");

        {
            let repo = GoalRepository::new(path.clone());
            repo.upsert(goal("House", 50000.0)).unwrap();
            repo.upsert(goal("Car", 8000.0)).unwrap();
        }

        {
            let repo = GoalRepository::new(path);
            repo.load().unwrap();
            let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|g| g.name).collect();
            assert_eq!(names, vec!["House", "Car"]);
        }
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let repo = GoalRepository::new(blocker.join("goals.json"));

        assert!(repo.upsert(goal("House", 50000.0)).is_err());
        assert!(repo.get_all().unwrap().is_empty());
    }
}
