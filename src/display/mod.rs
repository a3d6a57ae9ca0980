//! Display formatting for terminal output
//!
//! Currency, percentages and tables for the command line. The engine never
//! calls into this module; it only deals in raw numbers.

pub mod goal;
pub mod summary;
pub mod transaction;

pub use goal::{format_goal_details, format_goal_list, format_projection};
pub use summary::{format_advice, format_summary};
pub use transaction::format_transaction_table;

/// Format an amount with a currency symbol and two decimals
pub fn format_money(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: f64, symbol: &str) -> String {
    let text = format_money(amount, symbol);
    if amount < 0.0 {
        format!("\x1b[31m{}\x1b[0m", text)
    } else {
        format!("\x1b[32m{}\x1b[0m", text)
    }
}

/// Format a decimal rate (0.05) as a percentage (5.00%)
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
