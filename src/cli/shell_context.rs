use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;

use crate::config::{Config, ConfigManager};
use crate::controller::Controller;
use crate::ledger::Ledger;

use super::commands;
use super::core::{CliError, CliMode, CommandError, CommandResult, LoopControl};
use super::io::confirm_action;
use super::output::{self, MessageKind, OutputPreferences};
use super::presenter::TerminalPresenter;
use super::registry::CommandRegistry;

const PROMPT: &str = "budgety> ";
const SUGGESTION_DISTANCE: usize = 3;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub controller: Controller<TerminalPresenter>,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new().load()?;
        Ok(Self::with_config(mode, config))
    }

    pub fn with_config(mode: CliMode, config: Config) -> Self {
        let prefs = OutputPreferences::from(&config);
        output::set_preferences(prefs);

        let presenter = TerminalPresenter::stdout(prefs, config.currency_symbol.clone());
        let mut controller = Controller::new(Ledger::new(), presenter);
        controller.init();

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Self {
            mode,
            registry,
            controller,
            config,
            theme: ColorfulTheme::default(),
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        PROMPT.to_string()
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> CommandResult {
        match self.registry.handler(command) {
            Some(handler) => handler(self, args),
            None => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    pub fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min();
        if let Some((distance, name)) = best {
            if distance <= SUGGESTION_DISTANCE {
                output::info(format!("Suggestion: `{name}`?"));
            }
        }
    }

    /// Prints the display settings this session was started with.
    pub fn show_config(&self) {
        let config = &self.config;
        output::print(MessageKind::Section, "Configuration");
        let rows = [
            ("currency_symbol", config.currency_symbol.clone()),
            ("screen_reader_mode", config.screen_reader_mode.to_string()),
            ("high_contrast_mode", config.high_contrast_mode.to_string()),
            ("quiet_mode", config.quiet_mode.to_string()),
        ];
        for (key, value) in rows {
            output::print(MessageKind::Row, format!("{key:<20} {value}"));
        }
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(confirm_action(&self.theme, "Exit budgety?", true)?)
    }

    /// Prints a command failure; the shell keeps running.
    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }
}
