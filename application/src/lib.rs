//! Application layer for trivia-quorum
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{FetchMode, FetchParams};
pub use ports::{
    game_console::{ConsoleError, GameConsole, QuestionPrompt, Verdict},
    progress::{FetchProgressNotifier, NoProgress},
    question_bank::{QuestionBank, QuestionBankError},
};
pub use use_cases::assemble_questions::AssembleQuestionsUseCase;
pub use use_cases::play_game::{GameSession, GameState, PlayGameError};
