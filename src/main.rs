use std::io::{self, IsTerminal};
use std::process::ExitCode;
use argh::FromArgs;
use tracing_subscriber::EnvFilter;
use minish::config::{Config, DEFAULT_PROMPT};
use minish::repl::Repl;

#[derive(FromArgs)]
/// A minimal interactive command interpreter.
struct Cli {
    /// text shown before each input line
    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    prompt: String,

    /// log dispatch and child process events to standard error
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli: Cli = argh::from_env();
    let config = Config {
        prompt: cli.prompt,
        verbose: cli.verbose,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let mut repl = Repl::new(&config);
    match repl.run(io::stdin().lock(), io::stdout(), io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shell: {}", e);
            ExitCode::FAILURE
        }
    }
}
