#![allow(dead_code)]

use budgety::controller::{Controller, RawInput, RecordingPresenter};
use budgety::ledger::{EntryKind, Ledger};

/// A fresh controller wired to a presenter that records every call.
pub fn recording_controller() -> Controller<RecordingPresenter> {
    Controller::new(Ledger::new(), RecordingPresenter::default())
}

pub fn raw(kind: EntryKind, description: &str, value: f64) -> RawInput {
    RawInput::new(kind.tag(), description, value.to_string())
}

/// Ledger seeded with the entries used across the suites.
pub fn salary_and_rent() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", 1000.0);
    ledger.add_entry(EntryKind::Expense, "Rent", 300.0);
    ledger
}
