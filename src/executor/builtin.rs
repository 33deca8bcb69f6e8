pub mod commands;

use std::io::Write;
use crate::error::ShellResult;
use crate::executor::ExitSignal;
use crate::history::History;
use commands::{CdCommand, ExitCommand, HelpCommand, HistoryCommand};

/// What a builtin may touch while it runs.
pub struct BuiltinContext<'a> {
    pub history: &'a History,
    pub builtin_names: &'a [&'static str],
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

pub trait BuiltinCommand {
    fn name(&self) -> &'static str;
    /// `args[0]` is the builtin's own name.
    fn run(&self, args: &[String], ctx: &mut BuiltinContext<'_>) -> ShellResult<ExitSignal>;
}

/// Ordered table of builtins. Lookup is a linear scan and the first name match wins.
pub struct BuiltinRegistry {
    commands: Vec<Box<dyn BuiltinCommand>>,
    names: Vec<&'static str>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(CdCommand));
        registry.register(Box::new(HelpCommand));
        registry.register(Box::new(ExitCommand));
        registry.register(Box::new(HistoryCommand));
        registry
    }

    pub fn empty() -> Self {
        BuiltinRegistry {
            commands: Vec::new(),
            names: Vec::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn BuiltinCommand>) {
        self.names.push(cmd.name());
        self.commands.push(cmd);
    }

    pub fn find(&self, name: &str) -> Option<&dyn BuiltinCommand> {
        self.commands
            .iter()
            .find(|cmd| cmd.name() == name)
            .map(|cmd| cmd.as_ref())
    }

    /// Registered names in table order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}
