//! Terminal front end: a presenter, an interactive form, and a command shell.

pub mod commands;
pub mod core;
pub mod format;
pub mod io;
pub mod output;
pub mod presenter;
pub mod registry;
pub mod shell;
pub mod shell_context;

pub use self::core::{CliError, CliMode, CommandError, LoopControl};
pub use presenter::{Row, TerminalPresenter};
pub use shell::run_cli;
pub use shell_context::ShellContext;
