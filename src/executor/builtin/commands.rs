use std::io::Write;
use crate::error::{ShellError, ShellResult};
use crate::executor::ExitSignal;
use crate::executor::builtin::{BuiltinCommand, BuiltinContext};

pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }
    fn run(&self, args: &[String], _ctx: &mut BuiltinContext<'_>) -> ShellResult<ExitSignal> {
        // No implicit $HOME: a bare `cd` is an error.
        let target = args.get(1).ok_or(ShellError::MissingArgument("cd"))?;
        std::env::set_current_dir(target).map_err(ShellError::ChangeDir)?;
        tracing::debug!(%target, "changed directory");
        Ok(ExitSignal::Continue)
    }
}

pub struct HelpCommand;

impl BuiltinCommand for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }
    fn run(&self, _args: &[String], ctx: &mut BuiltinContext<'_>) -> ShellResult<ExitSignal> {
        writeln!(ctx.out, "Type program names and arguments, and hit enter.")?;
        writeln!(ctx.out, "The following are built-in commands:")?;
        for name in ctx.builtin_names {
            writeln!(ctx.out, "  {}", name)?;
        }
        writeln!(ctx.out, "Use the man command for information on other programs.")?;
        Ok(ExitSignal::Continue)
    }
}

pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }
    fn run(&self, _args: &[String], _ctx: &mut BuiltinContext<'_>) -> ShellResult<ExitSignal> {
        Ok(ExitSignal::Stop)
    }
}

pub struct HistoryCommand;

impl BuiltinCommand for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }
    fn run(&self, _args: &[String], ctx: &mut BuiltinContext<'_>) -> ShellResult<ExitSignal> {
        for line in ctx.history.render() {
            writeln!(ctx.out, "{}", line)?;
        }
        Ok(ExitSignal::Continue)
    }
}
