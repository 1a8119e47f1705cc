//! Entry storage, id assignment, and derived totals.

pub mod aggregates;
pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use aggregates::Aggregates;
pub use entry::{Entry, EntryKind, EntryRef, ExpenseEntry, IncomeEntry, Percentage};
pub use ledger::Ledger;
