use tracing::info;

use crate::controller::{DeleteOutcome, RawInput};
use crate::errors::{ControllerError, InputError};
use crate::utils::build_info;

use super::core::{CliMode, CommandError, CommandResult, LoopControl};
use super::io::FormInput;
use super::output::{self, MessageKind};
use super::registry::{CommandEntry, CommandRegistry};
use super::shell_context::ShellContext;

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "add",
        "Record an income or expense",
        "add [<inc|exp> <description> <value>]",
        cmd_add,
    ));
    registry.register(CommandEntry::new(
        "delete",
        "Remove an entry by its row id",
        "delete <exp-N|inc-N>",
        cmd_delete,
    ));
    registry.register(CommandEntry::new(
        "list",
        "Show every income and expense row",
        "list",
        cmd_list,
    ));
    registry.register(CommandEntry::new(
        "summary",
        "Show budget, totals, and share of income spent",
        "summary",
        cmd_summary,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Show display settings",
        "config [show]",
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "help",
        "List commands or describe one",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show build information",
        "version",
        cmd_version,
    ));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
    registry.alias("rm", "delete");
    registry.alias("ls", "list");
    registry.alias("quit", "exit");
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let result = match args {
        [] if context.mode == CliMode::Script => {
            return Err(usage_error(context, "add"));
        }
        [] => {
            let mut form = FormInput::new(&context.theme);
            context.controller.handle_add_from(&mut form)
        }
        [_] => return Err(usage_error(context, "add")),
        [kind, middle @ .., value] => {
            let raw = RawInput::new(*kind, middle.join(" "), *value);
            context.controller.handle_add(raw)
        }
    };

    match result {
        Ok(entry) => info!(kind = %entry.kind, id = entry.id, "entry added from shell"),
        // Already reported by the presenter.
        Err(ControllerError::Validation(_)) => {}
        Err(ControllerError::Input(InputError::Cancelled)) => output::info("Add cancelled."),
        Err(err) => return Err(err.into()),
    }
    Ok(LoopControl::Continue)
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [target] = args else {
        return Err(usage_error(context, "delete"));
    };
    match context.controller.handle_delete(target)? {
        DeleteOutcome::Deleted(_) => {}
        DeleteOutcome::NotFound(_) => {
            output::info(format!("No entry `{target}`; nothing to delete."))
        }
    }
    Ok(LoopControl::Continue)
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.controller.presenter_mut().show_rows();
    Ok(LoopControl::Continue)
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let aggregates = context.controller.ledger().read_aggregates();
    context.controller.presenter_mut().show_summary(&aggregates);
    Ok(LoopControl::Continue)
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => context.show_config(),
        [sub] if sub.eq_ignore_ascii_case("show") => context.show_config(),
        _ => return Err(usage_error(context, "config")),
    }
    Ok(LoopControl::Continue)
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let Some(entry) = context.registry.get(&name.to_lowercase()) else {
            context.suggest_command(name);
            return Ok(LoopControl::Continue);
        };
        output::print(
            MessageKind::Row,
            format!("{}: {}", entry.name, entry.description),
        );
        output::print(MessageKind::Row, format!("Usage: {}", entry.usage));
        return Ok(LoopControl::Continue);
    }

    output::print(MessageKind::Section, "Commands");
    for entry in context.registry.list() {
        output::print(
            MessageKind::Row,
            format!("{:<10} {}", entry.name, entry.description),
        );
    }
    Ok(LoopControl::Continue)
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::print(MessageKind::Row, build_info::current().summary());
    Ok(LoopControl::Continue)
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Ok(LoopControl::Exit)
}

fn usage_error(context: &ShellContext, name: &str) -> CommandError {
    let usage = context
        .registry
        .get(name)
        .map_or_else(|| name.to_string(), |entry| entry.usage.to_string());
    CommandError::InvalidArguments(format!("Usage: {usage}"))
}
