use super::entry::Percentage;

/// Totals derived from the current entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregates {
    pub budget: f64,
    pub income_sum: f64,
    pub expense_sum: f64,
    pub overall_percentage: Percentage,
}

impl Aggregates {
    pub fn from_sums(income_sum: f64, expense_sum: f64) -> Self {
        Self {
            budget: income_sum - expense_sum,
            income_sum,
            expense_sum,
            overall_percentage: Percentage::of(expense_sum, income_sum),
        }
    }

    /// The summary shown before anything has been recorded.
    pub fn empty() -> Self {
        Self::from_sums(0.0, 0.0)
    }
}

impl Default for Aggregates {
    fn default() -> Self {
        Self::empty()
    }
}
