//! Headless collaborators that record what the controller asked for.

use std::collections::VecDeque;

use crate::errors::{InputError, ValidationError};
use crate::ledger::{Aggregates, Entry, Percentage};

use super::composite_id::CompositeId;
use super::input::RawInput;
use super::presenter::{InputSource, Presenter};

#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    EntryRendered(Entry),
    EntryRemoved(CompositeId),
    BudgetSummary(Aggregates),
    ExpensePercentages(Vec<Percentage>),
    InputCleared,
    ValidationFailed(ValidationError),
    PeriodTitle(String),
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<PresenterEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn last_summary(&self) -> Option<&Aggregates> {
        self.events.iter().rev().find_map(|event| match event {
            PresenterEvent::BudgetSummary(aggregates) => Some(aggregates),
            _ => None,
        })
    }

    pub fn last_percentages(&self) -> Option<&[Percentage]> {
        self.events.iter().rev().find_map(|event| match event {
            PresenterEvent::ExpensePercentages(percentages) => Some(percentages.as_slice()),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn render_entry(&mut self, entry: &Entry) {
        self.events.push(PresenterEvent::EntryRendered(entry.clone()));
    }

    fn remove_rendered_entry(&mut self, id: &CompositeId) {
        self.events.push(PresenterEvent::EntryRemoved(*id));
    }

    fn render_budget_summary(&mut self, aggregates: &Aggregates) {
        self.events.push(PresenterEvent::BudgetSummary(*aggregates));
    }

    fn render_expense_percentages(&mut self, percentages: &[Percentage]) {
        self.events
            .push(PresenterEvent::ExpensePercentages(percentages.to_vec()));
    }

    fn clear_input_fields(&mut self) {
        self.events.push(PresenterEvent::InputCleared);
    }

    fn report_validation_error(&mut self, error: &ValidationError) {
        self.events.push(PresenterEvent::ValidationFailed(error.clone()));
    }

    fn render_period_title(&mut self, title: &str) {
        self.events.push(PresenterEvent::PeriodTitle(title.to_string()));
    }
}

/// Replays a fixed queue of form submissions; reports `Cancelled` once drained.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<RawInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = RawInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    pub fn push(&mut self, input: RawInput) {
        self.queue.push_back(input);
    }
}

impl InputSource for ScriptedInput {
    fn read_raw_input(&mut self) -> Result<RawInput, InputError> {
        self.queue.pop_front().ok_or(InputError::Cancelled)
    }
}
