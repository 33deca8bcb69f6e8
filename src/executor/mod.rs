mod builtin;
mod dispatcher;
mod launcher;

pub use builtin::{BuiltinCommand, BuiltinContext, BuiltinRegistry};
pub use builtin::commands::{CdCommand, ExitCommand, HelpCommand, HistoryCommand};
pub use dispatcher::Dispatcher;
pub use launcher::{Launcher, ProcessOutcome, SpawnLauncher, SystemLauncher};
#[cfg(unix)]
pub use launcher::ForkExecLauncher;

/// Whether the shell loop should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    Continue,
    Stop,
}
