mod common;

use budgety::ledger::{Aggregates, EntryKind, Ledger, Percentage};

#[test]
fn ids_stay_unique_and_increasing_across_deletes() {
    let mut ledger = Ledger::new();
    assert_eq!(ledger.add_entry(EntryKind::Expense, "a", 10.0).id(), 0);
    assert_eq!(ledger.add_entry(EntryKind::Expense, "b", 10.0).id(), 1);
    assert!(ledger.delete_entry(EntryKind::Expense, 0));
    assert_eq!(ledger.add_entry(EntryKind::Expense, "c", 10.0).id(), 2);

    let ids: Vec<u32> = ledger
        .entries(EntryKind::Expense)
        .iter()
        .map(|entry| entry.id())
        .collect();
    assert_eq!(ids, [1, 2]);
    assert!(!ledger.contains_duplicate_ids());
}

#[test]
fn partitions_number_independently() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Expense, "a", 1.0);
    ledger.add_entry(EntryKind::Expense, "b", 1.0);
    assert_eq!(ledger.add_entry(EntryKind::Income, "c", 1.0).id(), 0);
}

#[test]
fn long_interleaved_sequence_never_reuses_live_ids() {
    let mut ledger = Ledger::new();
    for round in 0..50u32 {
        ledger.add_entry(EntryKind::Income, format!("inc {round}"), 5.0);
        ledger.add_entry(EntryKind::Expense, format!("exp {round}"), 1.0);
        if round % 3 == 0 {
            let first = ledger.entries(EntryKind::Expense)[0].id();
            assert!(ledger.delete_entry(EntryKind::Expense, first));
        }
        assert!(!ledger.contains_duplicate_ids());
    }
    let ids: Vec<u32> = ledger
        .entries(EntryKind::Expense)
        .iter()
        .map(|entry| entry.id())
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn recompute_is_idempotent() {
    let ledger = common::salary_and_rent();
    let first = ledger.recompute_aggregates();
    let second = ledger.recompute_aggregates();
    assert_eq!(first, second);
    assert_eq!(ledger.read_aggregates(), first);
}

#[test]
fn budget_identity_holds_after_recompute() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", 1234.56);
    ledger.add_entry(EntryKind::Expense, "Rent", 789.01);
    ledger.add_entry(EntryKind::Expense, "Food", 99.99);
    let aggregates = ledger.recompute_aggregates();
    assert_eq!(aggregates.budget, aggregates.income_sum - aggregates.expense_sum);
}

#[test]
fn percentages_are_not_applicable_without_income() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Expense, "Rent", 300.0);
    ledger.add_entry(EntryKind::Expense, "Food", 50.0);

    let aggregates = ledger.recompute_aggregates();
    ledger.recompute_expense_percentages();

    assert_eq!(aggregates.overall_percentage, Percentage::NotApplicable);
    assert_eq!(
        ledger.read_expense_percentages(),
        vec![Percentage::NotApplicable, Percentage::NotApplicable]
    );
}

#[test]
fn quarter_of_income_reads_as_twenty_five_percent() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", 200.0);
    ledger.add_entry(EntryKind::Expense, "Groceries", 50.0);

    let aggregates = ledger.recompute_aggregates();
    ledger.recompute_expense_percentages();

    assert_eq!(aggregates.overall_percentage, Percentage::Value(25));
    assert_eq!(ledger.read_expense_percentages(), vec![Percentage::Value(25)]);
}

#[test]
fn deleting_unknown_id_reports_not_found_and_changes_nothing() {
    let mut ledger = Ledger::new();
    assert!(!ledger.delete_entry(EntryKind::Expense, 99));
    assert!(ledger.is_empty());
    assert_eq!(ledger.read_aggregates(), Aggregates::empty());

    let mut seeded = common::salary_and_rent();
    let before = seeded.read_aggregates();
    assert!(!seeded.delete_entry(EntryKind::Expense, 99));
    assert!(!seeded.delete_entry(EntryKind::Expense, 99));
    assert_eq!(seeded.len(EntryKind::Expense), 1);
    assert_eq!(seeded.read_aggregates(), before);
}

#[test]
fn salary_and_rent_round_trip() {
    let ledger = common::salary_and_rent();
    let aggregates = ledger.recompute_aggregates();
    assert_eq!(
        ledger.read_aggregates(),
        Aggregates {
            income_sum: 1000.0,
            expense_sum: 300.0,
            budget: 700.0,
            overall_percentage: Percentage::Value(30),
        }
    );
    assert_eq!(aggregates, ledger.read_aggregates());
}

#[test]
fn aggregates_track_mutations_without_explicit_recompute() {
    let mut ledger = common::salary_and_rent();
    ledger.add_entry(EntryKind::Expense, "Car", 200.0);
    assert_eq!(ledger.read_aggregates().expense_sum, 500.0);

    ledger.delete_entry(EntryKind::Income, 0);
    let aggregates = ledger.read_aggregates();
    assert_eq!(aggregates.income_sum, 0.0);
    assert_eq!(aggregates.budget, -500.0);
    assert_eq!(aggregates.overall_percentage, Percentage::NotApplicable);
}

#[test]
fn overall_and_per_entry_percentages_are_computed_independently() {
    let mut ledger = Ledger::new();
    ledger.add_entry(EntryKind::Income, "Salary", 300.0);
    ledger.add_entry(EntryKind::Expense, "a", 1.0);
    ledger.add_entry(EntryKind::Expense, "b", 1.0);
    ledger.add_entry(EntryKind::Expense, "c", 1.0);

    let aggregates = ledger.recompute_aggregates();
    ledger.recompute_expense_percentages();

    // Each entry rounds to 0%, the total of 3 rounds to 1%.
    assert_eq!(aggregates.overall_percentage, Percentage::Value(1));
    assert!(ledger
        .read_expense_percentages()
        .iter()
        .all(|percentage| *percentage == Percentage::Value(0)));
}
