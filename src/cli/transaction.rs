//! Transaction CLI commands
//!
//! Recording income and expenses, listing recent entries and known
//! categories. Input is validated here before it reaches the ledger.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_money, format_transaction_table};
use crate::error::{BudgetError, BudgetResult};
use crate::models::TransactionFilter;
use crate::services::{Clock, LedgerService};
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income
    Add {
        /// Amount received (e.g., "3000" or "3000.50")
        amount: f64,
        /// Where the money came from (e.g., Salary, Freelancing)
        source: String,
        /// Date received (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount spent
        amount: f64,
        /// Category (new names are added to the category list)
        category: String,
        /// What the money was spent on
        description: String,
        /// Date spent (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let service = LedgerService::new(storage, clock);

    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            date,
        } => {
            validate_amount(amount)?;
            let source = required_text("source", &source)?;
            let date = parse_date(date.as_deref())?;

            let income = service.record_income(amount, source, date)?;
            println!(
                "Income of {} from {} added on {}",
                format_money(income.amount, &settings.currency_symbol),
                income.source,
                income.date
            );
        }
    }

    Ok(())
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let service = LedgerService::new(storage, clock);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            validate_amount(amount)?;
            let category = required_text("category", &category)?;
            let description = required_text("description", &description)?;
            let date = parse_date(date.as_deref())?;

            let is_new = !storage.ledger.is_known_category(category)?;
            let expense = service.record_expense(amount, category, description, date)?;

            println!(
                "Expense of {} for {} added on {}",
                format_money(expense.amount, &settings.currency_symbol),
                expense.category,
                expense.date
            );
            if is_new {
                println!("New category '{}' registered.", expense.category);
            }
        }
    }

    Ok(())
}

/// Handle the transactions listing
pub fn handle_transactions_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    kind: &str,
    limit: Option<usize>,
) -> BudgetResult<()> {
    let filter: TransactionFilter = kind.parse()?;
    let limit = limit.unwrap_or(settings.recent_limit);

    let entries = LedgerService::new(storage, clock).recent_transactions(filter, limit)?;
    println!(
        "{}",
        format_transaction_table(&entries, &settings.currency_symbol)
    );

    Ok(())
}

/// Handle the category listing
pub fn handle_categories_command(storage: &Storage) -> BudgetResult<()> {
    for category in storage.ledger.categories()? {
        println!("{}", category);
    }
    Ok(())
}

/// Reject amounts that are not strictly positive numbers
pub fn validate_amount(amount: f64) -> BudgetResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(BudgetError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }
    Ok(())
}

fn required_text<'s>(field: &str, value: &'s str) -> BudgetResult<&'s str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::Validation(format!("Please enter a {}", field)));
    }
    Ok(trimmed)
}

fn parse_date(date: Option<&str>) -> BudgetResult<Option<NaiveDate>> {
    date.map(|s| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            BudgetError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
        })
    })
    .transpose()
}
