pub const DEFAULT_PROMPT: &str = "> ";

/// Runtime settings. Only the prompt text and log verbosity are configurable;
/// the shell reads no config files.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub prompt: String,
    pub verbose: bool,
}

impl Config {
    /// Default tracing directive when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            verbose: false,
        }
    }
}
