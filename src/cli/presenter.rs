use std::fmt;
use std::io::{self, Write};

use tracing::warn;

use crate::controller::{CompositeId, Presenter};
use crate::errors::ValidationError;
use crate::ledger::{Aggregates, Entry, EntryKind, Percentage};

use super::format::{format_amount, format_budget, format_percentage};
use super::output::{should_skip, style, MessageKind, OutputPreferences};

/// One displayed entry, as the terminal last rendered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: CompositeId,
    pub description: String,
    pub amount: String,
    pub percentage: Option<String>,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:<24} {:>16}",
            self.id.to_string(),
            self.description,
            self.amount
        )?;
        if let Some(percentage) = &self.percentage {
            write!(f, " {:>5}", percentage)?;
        }
        Ok(())
    }
}

/// Line-oriented presenter that keeps its own copy of the displayed rows.
pub struct TerminalPresenter<W: Write = io::Stdout> {
    out: W,
    prefs: OutputPreferences,
    currency_symbol: String,
    incomes: Vec<Row>,
    expenses: Vec<Row>,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout(prefs: OutputPreferences, currency_symbol: impl Into<String>) -> Self {
        Self::new(io::stdout(), prefs, currency_symbol)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, prefs: OutputPreferences, currency_symbol: impl Into<String>) -> Self {
        Self {
            out,
            prefs,
            currency_symbol: currency_symbol.into(),
            incomes: Vec::new(),
            expenses: Vec::new(),
        }
    }

    pub fn rows(&self, kind: EntryKind) -> &[Row] {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Prints both entry lists as currently displayed.
    pub fn show_rows(&mut self) {
        for kind in [EntryKind::Income, EntryKind::Expense] {
            let heading = format!("{} ({})", kind.label(), self.rows(kind).len());
            self.emit(MessageKind::Section, heading);
            let lines: Vec<String> = self.rows(kind).iter().map(Row::to_string).collect();
            if lines.is_empty() {
                self.emit(MessageKind::Info, "No entries yet.");
            }
            for line in lines {
                self.emit(MessageKind::Row, line);
            }
        }
    }

    pub fn show_summary(&mut self, aggregates: &Aggregates) {
        let symbol = &self.currency_symbol;
        let lines = [
            format!("Budget:   {}", format_budget(aggregates.budget, symbol)),
            format!(
                "Income:   {}",
                format_amount(aggregates.income_sum, EntryKind::Income, symbol)
            ),
            format!(
                "Expenses: {}  {}",
                format_amount(aggregates.expense_sum, EntryKind::Expense, symbol),
                format_percentage(aggregates.overall_percentage)
            ),
        ];
        for line in lines {
            self.emit(MessageKind::Row, line);
        }
    }

    fn rows_mut(&mut self, kind: EntryKind) -> &mut Vec<Row> {
        match kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        }
    }

    fn emit(&mut self, kind: MessageKind, message: impl fmt::Display) {
        if should_skip(kind, &self.prefs) {
            return;
        }
        let line = style(kind, message, &self.prefs);
        if let Err(err) = writeln!(self.out, "{line}") {
            warn!(error = %err, "failed to write terminal output");
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render_entry(&mut self, entry: &Entry) {
        let kind = entry.kind();
        let row = Row {
            id: CompositeId::from(entry.entry_ref()),
            description: entry.description().to_string(),
            amount: format_amount(entry.value(), kind, &self.currency_symbol),
            // Filled in by the percentage refresh that follows every add.
            percentage: None,
        };
        self.emit(MessageKind::Success, format!("Added {row}"));
        self.rows_mut(kind).push(row);
    }

    fn remove_rendered_entry(&mut self, id: &CompositeId) {
        let rows = self.rows_mut(id.entry_ref().kind);
        rows.retain(|row| row.id != *id);
        self.emit(MessageKind::Success, format!("Removed {id}"));
    }

    fn render_budget_summary(&mut self, aggregates: &Aggregates) {
        self.show_summary(aggregates);
    }

    fn render_expense_percentages(&mut self, percentages: &[Percentage]) {
        for (row, percentage) in self.expenses.iter_mut().zip(percentages) {
            row.percentage = Some(format_percentage(*percentage));
        }
        if self.expenses.is_empty() {
            return;
        }
        let shares = self
            .expenses
            .iter()
            .map(|row| {
                format!(
                    "{} {}",
                    row.id,
                    row.percentage.as_deref().unwrap_or_default()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        self.emit(MessageKind::Info, format!("Expense shares: {shares}"));
    }

    fn clear_input_fields(&mut self) {
        // Prompts start blank for every new entry; nothing is retained.
    }

    fn report_validation_error(&mut self, error: &ValidationError) {
        self.emit(
            MessageKind::Error,
            format!("Please enter a valid description and value ({error})"),
        );
    }

    fn render_period_title(&mut self, title: &str) {
        self.emit(MessageKind::Section, format!("Available budget in {title}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Controller, RawInput};
    use crate::ledger::Ledger;

    fn plain() -> OutputPreferences {
        OutputPreferences {
            screen_reader_mode: true,
            ..OutputPreferences::default()
        }
    }

    fn output(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_writer()).unwrap()
    }

    #[test]
    fn rows_follow_adds_and_deletes() {
        let presenter = TerminalPresenter::new(Vec::new(), plain(), "$");
        let mut controller = Controller::new(Ledger::new(), presenter);
        controller
            .handle_add(RawInput::new("inc", "Salary", "1000"))
            .unwrap();
        controller
            .handle_add(RawInput::new("exp", "Rent", "300"))
            .unwrap();
        controller
            .handle_add(RawInput::new("exp", "Food", "100"))
            .unwrap();
        controller.handle_delete("exp-0").unwrap();

        let rows = controller.presenter().rows(EntryKind::Expense);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.to_string(), "exp-1");
        assert_eq!(rows[0].percentage.as_deref(), Some("10%"));

        let (_, presenter) = controller.into_parts();
        let text = output(presenter);
        assert!(text.contains("Added inc-0"));
        assert!(text.contains("Removed exp-0"));
        assert!(text.contains("Budget:   + $ 900.00"));
        assert!(text.contains("Expenses: - $ 100.00  10%"));
    }

    #[test]
    fn validation_errors_are_printed() {
        let mut presenter = TerminalPresenter::new(Vec::new(), plain(), "$");
        presenter.report_validation_error(&ValidationError::EmptyDescription);
        assert!(output(presenter).starts_with("ERROR: Please enter a valid description"));
    }

    #[test]
    fn quiet_mode_hides_confirmations_but_keeps_summary() {
        let prefs = OutputPreferences {
            quiet_mode: true,
            ..plain()
        };
        let mut presenter = TerminalPresenter::new(Vec::new(), prefs, "$");
        presenter.render_entry(&Entry::new(EntryKind::Income, 0, "Salary", 10.0));
        presenter.render_budget_summary(&Aggregates::from_sums(10.0, 0.0));
        let text = output(presenter);
        assert!(!text.contains("Added"));
        assert!(text.contains("Income:   + $ 10.00"));
    }

    #[test]
    fn added_expense_line_omits_share_until_refresh() {
        let mut presenter = TerminalPresenter::new(Vec::new(), plain(), "$");
        presenter.render_entry(&Entry::new(EntryKind::Expense, 0, "Rent", 250.0));
        assert_eq!(presenter.rows(EntryKind::Expense)[0].percentage, None);

        presenter.render_expense_percentages(&[Percentage::Value(25)]);
        assert_eq!(
            presenter.rows(EntryKind::Expense)[0].percentage.as_deref(),
            Some("25%")
        );

        let text = output(presenter);
        let added = text
            .lines()
            .find(|line| line.starts_with("OK: Added exp-0"))
            .unwrap();
        assert!(!added.contains("---"), "{added}");
        assert!(text.contains("Expense shares: exp-0 25%"));
    }
}
