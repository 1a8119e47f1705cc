use crate::errors::{InputError, ValidationError};
use crate::ledger::{Aggregates, Entry, Percentage};

use super::composite_id::CompositeId;
use super::input::RawInput;

/// Where raw add-entry input comes from (an interactive form, a script, a test).
pub trait InputSource {
    fn read_raw_input(&mut self) -> Result<RawInput, InputError>;
}

/// Capabilities the controller drives after each change.
pub trait Presenter {
    fn render_entry(&mut self, entry: &Entry);
    fn remove_rendered_entry(&mut self, id: &CompositeId);
    fn render_budget_summary(&mut self, aggregates: &Aggregates);
    /// Positionally aligned with the expense rows currently displayed.
    fn render_expense_percentages(&mut self, percentages: &[Percentage]);
    fn clear_input_fields(&mut self);
    fn report_validation_error(&mut self, error: &ValidationError);
    fn render_period_title(&mut self, title: &str);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn render_entry(&mut self, entry: &Entry) {
        (**self).render_entry(entry);
    }

    fn remove_rendered_entry(&mut self, id: &CompositeId) {
        (**self).remove_rendered_entry(id);
    }

    fn render_budget_summary(&mut self, aggregates: &Aggregates) {
        (**self).render_budget_summary(aggregates);
    }

    fn render_expense_percentages(&mut self, percentages: &[Percentage]) {
        (**self).render_expense_percentages(percentages);
    }

    fn clear_input_fields(&mut self) {
        (**self).clear_input_fields();
    }

    fn report_validation_error(&mut self, error: &ValidationError) {
        (**self).report_validation_error(error);
    }

    fn render_period_title(&mut self, title: &str) {
        (**self).render_period_title(title);
    }
}
