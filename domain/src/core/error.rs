//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question count {count} is outside the allowed range {min}..={max}")]
    QuestionCountOutOfRange { count: usize, min: usize, max: usize },

    #[error("Unknown category menu number: {0}")]
    UnknownCategory(u32),

    #[error("Unknown difficulty menu number: {0}")]
    UnknownDifficulty(u32),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}
