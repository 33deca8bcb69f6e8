use std::io::Write;
use tracing::debug;
use crate::error::ShellError;
use crate::executor::{BuiltinContext, BuiltinRegistry, ExitSignal, Launcher, ProcessOutcome, SystemLauncher};
use crate::history::History;

/// Routes a tokenized line to a builtin or, failing that, to the launcher.
pub struct Dispatcher<L: Launcher = SystemLauncher> {
    builtins: BuiltinRegistry,
    launcher: L,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::with_launcher(SystemLauncher::default())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Launcher> Dispatcher<L> {
    pub fn with_launcher(launcher: L) -> Self {
        Dispatcher {
            builtins: BuiltinRegistry::new(),
            launcher,
        }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn dispatch(
        &mut self,
        args: &[String],
        history: &History,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> ExitSignal {
        let Some(name) = args.first() else {
            return ExitSignal::Continue;
        };

        match self.builtins.find(name) {
            Some(cmd) => {
                debug!(builtin = %name, "running builtin");
                let mut ctx = BuiltinContext {
                    history,
                    builtin_names: self.builtins.names(),
                    out,
                    err,
                };
                match cmd.run(args, &mut ctx) {
                    Ok(status) => status,
                    Err(e) => {
                        report(ctx.err, &e);
                        ExitSignal::Continue
                    }
                }
            }
            None => self.launch(args, out, err),
        }
    }

    fn launch(&mut self, args: &[String], out: &mut dyn Write, err: &mut dyn Write) -> ExitSignal {
        // Anything we printed must reach the terminal before the child writes.
        if let Err(e) = out.flush() {
            debug!(error = %e, "failed to flush output before launch");
        }

        match self.launcher.launch(args) {
            ProcessOutcome::NormalExit(code) => debug!(program = %args[0], code, "child exited"),
            ProcessOutcome::KilledBySignal(signal) => {
                debug!(program = %args[0], signal, "child killed by signal")
            }
            ProcessOutcome::LaunchFailed(reason) => {
                // The user sees the `shell:` line below.
                debug!(program = %args[0], error = %reason, "launch failed");
                report(err, &ShellError::Launch(reason));
            }
        }
        ExitSignal::Continue
    }
}

fn report(err: &mut dyn Write, e: &ShellError) {
    // Nowhere left to report a failing stderr.
    let _ = writeln!(err, "shell: {}", e);
}
