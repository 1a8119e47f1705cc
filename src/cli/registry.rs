use std::collections::HashMap;

use super::core::CommandResult;
use super::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Shell commands in registration order, addressable by name or alias.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<CommandEntry>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        match self.index.get(entry.name) {
            Some(&slot) => self.commands[slot] = entry,
            None => {
                self.index.insert(entry.name, self.commands.len());
                self.commands.push(entry);
            }
        }
    }

    /// Makes `alias` resolve to an already registered command.
    pub fn alias(&mut self, alias: &'static str, target: &str) {
        if let Some(&slot) = self.index.get(target) {
            self.index.insert(alias, slot);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.index.get(name).map(|&slot| &self.commands[slot])
    }

    pub fn list(&self) -> &[CommandEntry] {
        &self.commands
    }

    /// Every name the shell accepts, aliases included.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.index.keys().copied()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }
}
