pub mod config;
pub mod error;
pub mod executor;
pub mod history;
pub mod prompt;
pub mod repl;
pub mod tokenizer;
