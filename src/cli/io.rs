use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::controller::{InputSource, RawInput};
use crate::errors::InputError;
use crate::ledger::EntryKind;

use super::core::CommandError;

const KIND_CHOICES: [EntryKind; 2] = [EntryKind::Income, EntryKind::Expense];

/// Interactive add-entry form: type, description, value.
pub struct FormInput<'a> {
    theme: &'a ColorfulTheme,
}

impl<'a> FormInput<'a> {
    pub fn new(theme: &'a ColorfulTheme) -> Self {
        Self { theme }
    }
}

impl InputSource for FormInput<'_> {
    fn read_raw_input(&mut self) -> Result<RawInput, InputError> {
        let labels: Vec<String> = KIND_CHOICES
            .iter()
            .map(|kind| format!("{} ({})", kind.label(), kind.tag()))
            .collect();
        let choice = Select::with_theme(self.theme)
            .with_prompt("Type")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?
            .ok_or(InputError::Cancelled)?;

        // Empty fields are passed through so the controller can reject them.
        let description = Input::<String>::with_theme(self.theme)
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        let value = Input::<String>::with_theme(self.theme)
            .with_prompt("Value")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;

        Ok(RawInput::new(KIND_CHOICES[choice].tag(), description, value))
    }
}

fn prompt_error(err: dialoguer::Error) -> InputError {
    InputError::Prompt(err.to_string())
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}
