use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
    Row,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub quiet_mode: bool,
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            screen_reader_mode: config.screen_reader_mode,
            high_contrast_mode: config.high_contrast_mode,
            quiet_mode: config.quiet_mode,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

/// Informational chatter is dropped in quiet mode; rows, sections and problems never are.
pub fn should_skip(kind: MessageKind, prefs: &OutputPreferences) -> bool {
    prefs.quiet_mode && matches!(kind, MessageKind::Info | MessageKind::Success)
}

fn label(kind: MessageKind) -> Option<&'static str> {
    match kind {
        MessageKind::Info => Some("INFO"),
        MessageKind::Success => Some("OK"),
        MessageKind::Warning => Some("WARNING"),
        MessageKind::Error => Some("ERROR"),
        MessageKind::Section | MessageKind::Row => None,
    }
}

/// Renders a message as a single line, applying color unless the
/// preferences ask for plain output.
pub fn style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let line = match (kind, label(kind)) {
        (MessageKind::Section, _) => format!("=== {} ===", text.trim()),
        (_, Some(label)) => format!("{label}: {text}"),
        (_, None) => text,
    };

    if prefs.screen_reader_mode {
        return line;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Warning | MessageKind::Error | MessageKind::Section => {
                line.bold().to_string()
            }
            _ => line,
        };
    }

    match kind {
        MessageKind::Success => line.bright_green().to_string(),
        MessageKind::Warning => line.bright_yellow().to_string(),
        MessageKind::Error => line.bright_red().to_string(),
        MessageKind::Section => line.bold().to_string(),
        MessageKind::Info | MessageKind::Row => line,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    if should_skip(kind, &prefs) {
        return;
    }
    println!("{}", style(kind, message, &prefs));
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: OutputPreferences = OutputPreferences {
        screen_reader_mode: true,
        high_contrast_mode: false,
        quiet_mode: false,
    };

    #[test]
    fn plain_style_prefixes_label() {
        assert_eq!(style(MessageKind::Error, "boom", &PLAIN), "ERROR: boom");
        assert_eq!(style(MessageKind::Section, " Budget ", &PLAIN), "=== Budget ===");
        assert_eq!(style(MessageKind::Row, "exp-0", &PLAIN), "exp-0");
    }

    #[test]
    fn quiet_mode_only_hides_chatter() {
        let quiet = OutputPreferences {
            quiet_mode: true,
            ..PLAIN
        };
        assert!(should_skip(MessageKind::Info, &quiet));
        assert!(!should_skip(MessageKind::Error, &quiet));
        assert!(!should_skip(MessageKind::Row, &quiet));
    }
}
