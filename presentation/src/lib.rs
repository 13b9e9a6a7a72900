//! Presentation layer for trivia-quorum
//!
//! This crate contains CLI definitions, the terminal game console,
//! output formatting, and fetch progress reporters.

pub mod cli;
pub mod console;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use console::{
    prompt::{InputIssue, parse_choice},
    terminal::TerminalConsole,
};
pub use output::formatter::GameFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
