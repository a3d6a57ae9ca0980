//! Savings goal and projection CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_goal_details, format_goal_list, format_projection};
use crate::error::{BudgetError, BudgetResult};
use crate::projection::InvestmentProjection;
use crate::services::GoalTracker;
use crate::storage::Storage;

use super::transaction::validate_amount;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal (replaces an existing goal with the same name)
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: f64,
        /// Years to reach the goal
        years: u32,
        /// Expected annual interest rate (e.g., 0.05 for 5%)
        #[arg(allow_negative_numbers = true)]
        rate: f64,
    },

    /// List all savings goals
    List,

    /// Show one savings goal
    Show {
        /// Goal name
        name: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> BudgetResult<()> {
    let tracker = GoalTracker::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        GoalCommands::Add {
            name,
            target,
            years,
            rate,
        } => {
            validate_amount(target)?;
            if years == 0 {
                return Err(BudgetError::Validation(
                    "Years must be a positive number".into(),
                ));
            }

            let goal = tracker.create_goal(name.trim(), target, years, rate)?;
            println!("Savings goal saved.\n");
            print!("{}", format_goal_details(&goal, symbol));
        }
        GoalCommands::List => {
            print!("{}", format_goal_list(&tracker.list_goals()?, symbol));
        }
        GoalCommands::Show { name } => {
            print!("{}", format_goal_details(&tracker.get_goal(&name)?, symbol));
        }
    }

    Ok(())
}

/// Handle a lump-sum growth projection
pub fn handle_project_command(
    settings: &Settings,
    principal: f64,
    rate: f64,
    years: u32,
) -> BudgetResult<()> {
    let projection = InvestmentProjection::new(principal, rate, years);
    print!("{}", format_projection(&projection, &settings.currency_symbol));
    Ok(())
}
