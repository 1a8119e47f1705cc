use tracing::{debug, error};

use super::{
    aggregates::Aggregates,
    entry::{Entry, EntryKind, Percentage},
};

/// In-memory store of income and expense entries for one session.
///
/// Aggregates are computed from the entries on every read, so they can never
/// lag behind a mutation. Per-expense percentages are stored on the entries
/// and reset to [`Percentage::NotApplicable`] by every mutation until
/// [`Ledger::recompute_expense_percentages`] runs again.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Entry>,
    incomes: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry and returns it.
    ///
    /// The id is one past the largest id currently in the partition, or 0
    /// for an empty partition. Values are stored as given; callers are
    /// expected to have rejected non-positive input already.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        value: f64,
    ) -> &Entry {
        // Invariant violation: reported through the error event, never a panic.
        if !(value.is_finite() && value > 0.0) {
            error!(%kind, value, "non-positive or non-finite value reached the ledger");
        }

        let id = self.next_id(kind);
        let entry = Entry::new(kind, id, description, value);
        debug!(%kind, id, value, "adding entry");

        self.invalidate_percentages();
        let partition = self.partition_mut(kind);
        partition.push(entry);
        debug_assert!(!self.contains_duplicate_ids(), "duplicate id in {kind} partition");

        let partition = self.partition(kind);
        &partition[partition.len() - 1]
    }

    /// Removes the entry with `id`. Returns `false` when no such entry exists.
    pub fn delete_entry(&mut self, kind: EntryKind, id: u32) -> bool {
        let Some(index) = self.partition(kind).iter().position(|entry| entry.id() == id) else {
            debug!(%kind, id, "delete requested for unknown entry");
            return false;
        };
        self.partition_mut(kind).remove(index);
        self.invalidate_percentages();
        debug!(%kind, id, "deleted entry");
        true
    }

    pub fn recompute_aggregates(&self) -> Aggregates {
        let aggregates = self.read_aggregates();
        debug!(
            income = aggregates.income_sum,
            expense = aggregates.expense_sum,
            budget = aggregates.budget,
            "recomputed aggregates"
        );
        aggregates
    }

    /// Refreshes every expense's share of total income.
    pub fn recompute_expense_percentages(&mut self) {
        let income_sum = Self::total(&self.incomes);
        for entry in &mut self.expenses {
            if let Entry::Expense(expense) = entry {
                expense.calc_percentage(income_sum);
            }
        }
    }

    pub fn read_aggregates(&self) -> Aggregates {
        Aggregates::from_sums(Self::total(&self.incomes), Self::total(&self.expenses))
    }

    /// One percentage per expense, in storage order.
    pub fn read_expense_percentages(&self) -> Vec<Percentage> {
        self.expenses.iter().map(Entry::percentage_of_income).collect()
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        self.partition(kind)
    }

    pub fn entry(&self, kind: EntryKind, id: u32) -> Option<&Entry> {
        self.partition(kind).iter().find(|entry| entry.id() == id)
    }

    pub fn expense_percentage(&self, id: u32) -> Option<Percentage> {
        self.entry(EntryKind::Expense, id).map(Entry::percentage_of_income)
    }

    pub fn len(&self, kind: EntryKind) -> usize {
        self.partition(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.incomes.is_empty()
    }

    pub fn contains_duplicate_ids(&self) -> bool {
        [&self.expenses, &self.incomes].into_iter().any(|partition| {
            partition.iter().enumerate().any(|(idx, entry)| {
                partition[idx + 1..]
                    .iter()
                    .any(|other| other.id() == entry.id())
            })
        })
    }

    fn next_id(&self, kind: EntryKind) -> u32 {
        self.partition(kind)
            .iter()
            .map(Entry::id)
            .max()
            .map_or(0, |max| max + 1)
    }

    fn invalidate_percentages(&mut self) {
        for entry in &mut self.expenses {
            if let Entry::Expense(expense) = entry {
                expense.percentage_of_income = Percentage::NotApplicable;
            }
        }
    }

    fn total(partition: &[Entry]) -> f64 {
        partition.iter().map(Entry::value).sum()
    }

    fn partition(&self, kind: EntryKind) -> &Vec<Entry> {
        match kind {
            EntryKind::Expense => &self.expenses,
            EntryKind::Income => &self.incomes,
        }
    }

    fn partition_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Expense => &mut self.expenses,
            EntryKind::Income => &mut self.incomes,
        }
    }
}
