//! Orchestrates add/delete actions: validate, mutate the ledger, recompute,
//! and push the results to a [`Presenter`].

pub mod composite_id;
pub mod input;
pub mod presenter;
pub mod recording;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::errors::ControllerError;
use crate::ledger::{Aggregates, EntryRef, Ledger};

pub use composite_id::CompositeId;
pub use input::{RawInput, ValidatedInput};
pub use presenter::{InputSource, Presenter};
pub use recording::{PresenterEvent, RecordingPresenter, ScriptedInput};

const PERIOD_TITLE_FORMAT: &str = "%B %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(EntryRef),
    NotFound(EntryRef),
}

impl DeleteOutcome {
    pub fn is_deleted(self) -> bool {
        matches!(self, DeleteOutcome::Deleted(_))
    }
}

/// Owns the session's ledger and drives one user action at a time.
pub struct Controller<P: Presenter> {
    ledger: Ledger,
    presenter: P,
}

impl<P: Presenter> Controller<P> {
    pub fn new(ledger: Ledger, presenter: P) -> Self {
        Self { ledger, presenter }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_parts(self) -> (Ledger, P) {
        (self.ledger, self.presenter)
    }

    /// Shows the current month and an empty summary.
    pub fn init(&mut self) {
        self.init_at(Local::now().date_naive());
    }

    pub fn init_at(&mut self, today: NaiveDate) {
        let title = today.format(PERIOD_TITLE_FORMAT).to_string();
        self.presenter.render_period_title(&title);
        self.presenter.render_budget_summary(&Aggregates::empty());
    }

    /// Validates and records a new entry, then refreshes the display.
    ///
    /// On a validation failure the presenter is told why and the ledger is
    /// left untouched.
    pub fn handle_add(&mut self, raw: RawInput) -> Result<EntryRef, ControllerError> {
        let input = match raw.validate() {
            Ok(input) => input,
            Err(err) => {
                warn!(error = %err, "rejected entry input");
                self.presenter.report_validation_error(&err);
                return Err(err.into());
            }
        };

        let entry = self
            .ledger
            .add_entry(input.kind, input.description, input.value);
        let entry_ref = entry.entry_ref();
        self.presenter.render_entry(entry);
        self.presenter.clear_input_fields();

        self.refresh();
        Ok(entry_ref)
    }

    pub fn handle_add_from<I>(&mut self, source: &mut I) -> Result<EntryRef, ControllerError>
    where
        I: InputSource + ?Sized,
    {
        let raw = source.read_raw_input()?;
        self.handle_add(raw)
    }

    /// Deletes the row addressed by a composite id such as `exp-7`.
    pub fn handle_delete(&mut self, composite_id: &str) -> Result<DeleteOutcome, ControllerError> {
        let id = composite_id.trim().parse::<CompositeId>()?;
        Ok(self.handle_delete_entry(id.entry_ref()))
    }

    pub fn handle_delete_entry(&mut self, target: EntryRef) -> DeleteOutcome {
        if !self.ledger.delete_entry(target.kind, target.id) {
            debug!(kind = %target.kind, id = target.id, "nothing to delete");
            return DeleteOutcome::NotFound(target);
        }

        self.presenter.remove_rendered_entry(&CompositeId::from(target));
        self.refresh();
        DeleteOutcome::Deleted(target)
    }

    /// Recompute-and-render cycle shared by every successful mutation.
    fn refresh(&mut self) {
        let aggregates = self.ledger.recompute_aggregates();
        self.presenter.render_budget_summary(&aggregates);

        self.ledger.recompute_expense_percentages();
        let percentages = self.ledger.read_expense_percentages();
        self.presenter.render_expense_percentages(&percentages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_renders_month_title_and_empty_summary() {
        let mut controller = Controller::new(Ledger::new(), RecordingPresenter::default());
        controller.init_at(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(
            controller.presenter().events(),
            &[
                PresenterEvent::PeriodTitle("March 2024".into()),
                PresenterEvent::BudgetSummary(Aggregates::empty()),
            ]
        );
    }
}
