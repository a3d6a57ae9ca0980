//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod goal;
pub mod report;
pub mod transaction;

pub use goal::{handle_goal_command, handle_project_command, GoalCommands};
pub use report::{handle_advice_command, handle_summary_command};
pub use transaction::{
    handle_categories_command, handle_expense_command, handle_income_command,
    handle_transactions_command, ExpenseCommands, IncomeCommands,
};
