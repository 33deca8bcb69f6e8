use std::io;
use thiserror::Error;

/// Errors surfaced by the shell. Everything except `Read` and `Io` raised by
/// the loop itself is reported and recovered from.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("expected argument to \"{0}\"")]
    MissingArgument(&'static str),
    #[error("{0}")]
    ChangeDir(#[source] io::Error),
    #[error("{0}")]
    Launch(#[source] io::Error),
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;
