//! Game console port for talking to the player.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`GameConsole`] - defined here in application layer
//! - **Adapter**: `TerminalConsole` - implemented in presentation layer
//!
//! # Contract
//!
//! Methods that read input return only *valid* values. Malformed or
//! out-of-range input is the adapter's problem: it re-prompts until the
//! player gives something usable. The only errors that cross this port
//! are I/O failures, including the input stream closing.

use thiserror::Error;
use trivia_domain::{AnswerOutcome, GameSettings, Question, SessionStats};

/// Error type for console operations.
///
/// These errors represent failures of the terminal itself. Malformed
/// player input is handled by re-prompting and never surfaces here.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The input stream reached end-of-file.
    #[error("Input closed")]
    Closed,

    /// Reading or writing the terminal failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ConsoleError {
    pub fn is_closed(&self) -> bool {
        matches!(self, ConsoleError::Closed)
    }
}

/// One question as handed to the player
#[derive(Debug, Clone, Copy)]
pub struct QuestionPrompt<'a> {
    /// 1-based position in this playthrough
    pub number: usize,
    /// Number of questions in this playthrough
    pub total: usize,
    pub question: &'a Question,
    /// Shuffled options; the player answers with a 1-based index into these
    pub options: &'a [String],
}

/// What the player learns after answering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub outcome: AnswerOutcome,
    pub correct_answer: String,
}

/// Port for the interactive side of a game session.
pub trait GameConsole: Send {
    /// Ask for question count, category, and difficulty.
    fn read_settings(&mut self) -> Result<GameSettings, ConsoleError>;

    /// Tell the player what they are about to play, before fetching.
    fn announce_game(&mut self, settings: &GameSettings);

    /// Called after fetching with how many questions actually arrived.
    fn questions_ready(&mut self, _requested: usize, _available: usize) {}

    /// Present a question and return a selection in `1..=prompt.options.len()`.
    fn ask_question(&mut self, prompt: &QuestionPrompt<'_>) -> Result<usize, ConsoleError>;

    fn show_verdict(&mut self, verdict: &Verdict);

    fn show_summary(&mut self, stats: &SessionStats);

    /// Yes/no: play another game?
    fn ask_replay(&mut self) -> Result<bool, ConsoleError>;

    /// Called once when the session terminates.
    fn farewell(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_error_display() {
        assert_eq!(ConsoleError::Closed.to_string(), "Input closed");
        assert_eq!(
            ConsoleError::Io("broken pipe".to_string()).to_string(),
            "I/O error: broken pipe"
        );
    }

    #[test]
    fn test_is_closed_check() {
        assert!(ConsoleError::Closed.is_closed());
        assert!(!ConsoleError::Io("x".to_string()).is_closed());
    }
}
