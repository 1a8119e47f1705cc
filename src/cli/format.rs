//! Currency and percentage labels for the terminal front end.

use crate::ledger::{EntryKind, Percentage};

const NOT_APPLICABLE_LABEL: &str = "---";

/// Formats an amount as `+ $ 1,234.50` (income) or `- $ 300.00` (expense).
///
/// The sign comes from `kind`, never from the value; the magnitude is always
/// printed with two decimals and comma grouping.
pub fn format_amount(value: f64, kind: EntryKind, symbol: &str) -> String {
    let sign = match kind {
        EntryKind::Income => '+',
        EntryKind::Expense => '-',
    };
    let cents = (value.abs() * 100.0).round() as u64;
    format!(
        "{sign} {symbol} {}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// The budget reads as income when positive and as an expense otherwise.
pub fn format_budget(budget: f64, symbol: &str) -> String {
    let kind = if budget > 0.0 {
        EntryKind::Income
    } else {
        EntryKind::Expense
    };
    format_amount(budget, kind, symbol)
}

pub fn format_percentage(percentage: Percentage) -> String {
    match percentage {
        Percentage::Value(value) if value > 0 => format!("{value}%"),
        _ => NOT_APPLICABLE_LABEL.to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
