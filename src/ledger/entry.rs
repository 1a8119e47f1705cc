use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Which partition of the ledger an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Expense,
    Income,
}

impl EntryKind {
    /// Short tag used in composite row ids (`exp-3`, `inc-0`).
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::Expense => "exp",
            EntryKind::Income => "inc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Expense => "Expense",
            EntryKind::Income => "Income",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EntryKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exp" | "expense" => Ok(EntryKind::Expense),
            "inc" | "income" => Ok(EntryKind::Income),
            other => Err(ValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// Share of total income, or the "not applicable" sentinel when there is no
/// income to compare against. Never conflated with zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Percentage {
    Value(i64),
    #[default]
    NotApplicable,
}

impl Percentage {
    /// `round(100 * part / whole)`, rounding half away from zero.
    pub fn of(part: f64, whole: f64) -> Self {
        if whole > 0.0 {
            Percentage::Value((part / whole * 100.0).round() as i64)
        } else {
            Percentage::NotApplicable
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseEntry {
    pub id: u32,
    pub description: String,
    pub value: f64,
    pub percentage_of_income: Percentage,
}

impl ExpenseEntry {
    pub fn new(id: u32, description: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            description: description.into(),
            value,
            percentage_of_income: Percentage::NotApplicable,
        }
    }

    pub fn calc_percentage(&mut self, total_income: f64) {
        self.percentage_of_income = Percentage::of(self.value, total_income);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncomeEntry {
    pub id: u32,
    pub description: String,
    pub value: f64,
}

impl IncomeEntry {
    pub fn new(id: u32, description: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            description: description.into(),
            value,
        }
    }
}

/// A single recorded income or expense.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Expense(ExpenseEntry),
    Income(IncomeEntry),
}

impl Entry {
    pub fn new(kind: EntryKind, id: u32, description: impl Into<String>, value: f64) -> Self {
        match kind {
            EntryKind::Expense => Entry::Expense(ExpenseEntry::new(id, description, value)),
            EntryKind::Income => Entry::Income(IncomeEntry::new(id, description, value)),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Expense(_) => EntryKind::Expense,
            Entry::Income(_) => EntryKind::Income,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Entry::Expense(entry) => entry.id,
            Entry::Income(entry) => entry.id,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Entry::Expense(entry) => &entry.description,
            Entry::Income(entry) => &entry.description,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Entry::Expense(entry) => entry.value,
            Entry::Income(entry) => entry.value,
        }
    }

    /// Percentage of income for expenses; incomes never carry one.
    pub fn percentage_of_income(&self) -> Percentage {
        match self {
            Entry::Expense(entry) => entry.percentage_of_income,
            Entry::Income(_) => Percentage::NotApplicable,
        }
    }

    pub fn entry_ref(&self) -> EntryRef {
        EntryRef::new(self.kind(), self.id())
    }
}

/// Structured address of an entry: its partition plus its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryRef {
    pub kind: EntryKind,
    pub id: u32,
}

impl EntryRef {
    pub fn new(kind: EntryKind, id: u32) -> Self {
        Self { kind, id }
    }
}
