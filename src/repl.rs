use std::io::{BufRead, Write};
use tracing::debug;
use crate::config::Config;
use crate::error::{ShellError, ShellResult};
use crate::executor::{Dispatcher, ExitSignal, Launcher, SystemLauncher};
use crate::history::History;
use crate::prompt::ShellPrompt;
use crate::tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellState {
    Running,
    Stopped,
}

/// The read-tokenize-record-dispatch loop. Owns the session's history.
pub struct Repl<L: Launcher = SystemLauncher> {
    prompt: ShellPrompt,
    history: History,
    dispatcher: Dispatcher<L>,
}

impl Repl {
    pub fn new(config: &Config) -> Self {
        Self::with_dispatcher(config, Dispatcher::new())
    }
}

impl<L: Launcher> Repl<L> {
    pub fn with_dispatcher(config: &Config, dispatcher: Dispatcher<L>) -> Self {
        Repl {
            prompt: ShellPrompt::new(config.prompt.as_str()),
            history: History::new(),
            dispatcher,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn dispatcher(&self) -> &Dispatcher<L> {
        &self.dispatcher
    }

    /// Runs until `exit` or end-of-input (`Ok`), or until input can no longer
    /// be read or the prompt can no longer be written (`Err`).
    pub fn run<R, O, E>(&mut self, mut input: R, mut out: O, mut err: E) -> ShellResult<()>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let mut state = ShellState::Running;

        while state == ShellState::Running {
            self.prompt.show_prompt(&mut out)?;

            let line = match self.prompt.read_line(&mut input) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("end of input");
                    break;
                }
                Err(e) => return Err(ShellError::Read(e)),
            };

            let args = tokenizer::tokenize(&line);
            self.history.record(&args);

            state = match self.dispatcher.dispatch(&args, &self.history, &mut out, &mut err) {
                ExitSignal::Continue => ShellState::Running,
                ExitSignal::Stop => ShellState::Stopped,
            };
        }

        // Stopping is a success even if the last flush fails.
        if let Err(e) = out.flush() {
            debug!(error = %e, "failed to flush output on exit");
        }
        Ok(())
    }
}
