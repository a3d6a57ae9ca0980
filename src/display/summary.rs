//! Summary and advice display formatting

use crate::models::Summary;

use super::{format_bar, format_money, format_money_colored, separator};

/// Format a period summary with its category breakdown
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Financial Summary ({})\n", summary.period.label()));
    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "Total Income:   {:>14}\n",
        format_money(summary.total_income, symbol)
    ));
    output.push_str(&format!(
        "Total Expenses: {:>14}\n",
        format_money(summary.total_expenses, symbol)
    ));
    output.push_str(&format!(
        "Balance:        {:>14}\n",
        format_money_colored(summary.balance, symbol)
    ));

    if summary.expenses_by_category.is_empty() {
        output.push_str("\nNo expenses in this period.\n");
        return output;
    }

    output.push_str("\nExpense Breakdown by Category:\n");
    let max = summary
        .categories_by_amount()
        .first()
        .map(|(_, amount)| *amount)
        .unwrap_or(0.0);

    for (category, amount) in summary.categories_by_amount() {
        output.push_str(&format!(
            "  {:<18} {:>12} ({:>5.1}%) {}\n",
            category,
            format_money(amount, symbol),
            summary.category_percentage(category),
            format_bar(amount, max, 20)
        ));
    }

    output
}

/// Format advice lines as a bulleted list
pub fn format_advice(advice: &[String]) -> String {
    advice
        .iter()
        .map(|line| format!("• {}\n", line))
        .collect()
}
