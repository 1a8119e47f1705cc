#![doc(test(attr(deny(warnings))))]

//! Budgety records income and expense entries and keeps the budget,
//! totals, and each expense's share of income up to date.
//!
//! The [`ledger`] owns the entries, the [`controller`] sequences every
//! add and delete, and [`cli`] is a terminal presenter built on top.

pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

pub use controller::{Controller, DeleteOutcome, Presenter, RawInput};
pub use ledger::{Aggregates, Entry, EntryKind, Ledger, Percentage};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budgety tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
