//! Question entities

use super::sanitizer::TextSanitizer;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A question record exactly as the question bank delivers it.
///
/// Text fields are still HTML-entity escaped. Unknown fields in the
/// provider payload (e.g. `type`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub category: String,
}

/// A multiple-choice trivia question (Entity)
///
/// All text is sanitized. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    difficulty: String,
    category: String,
}

impl Question {
    /// Create a question from already-clean text.
    ///
    /// Fails if the text or correct answer is blank, or if there are no
    /// incorrect answers to choose from.
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
        difficulty: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        let correct_answer = correct_answer.into();

        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question text is empty".to_string(),
            ));
        }
        if correct_answer.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(format!(
                "no correct answer for '{}'",
                text
            )));
        }
        if incorrect_answers.is_empty() {
            return Err(DomainError::InvalidQuestion(format!(
                "no incorrect answers for '{}'",
                text
            )));
        }

        Ok(Self {
            text,
            correct_answer,
            incorrect_answers,
            difficulty: difficulty.into(),
            category: category.into(),
        })
    }

    /// Build a question from a raw record, sanitizing every text field
    pub fn from_raw(raw: RawQuestion, sanitizer: &dyn TextSanitizer) -> Result<Self, DomainError> {
        Self::new(
            sanitizer.sanitize(&raw.question),
            sanitizer.sanitize(&raw.correct_answer),
            raw.incorrect_answers
                .iter()
                .map(|answer| sanitizer.sanitize(answer))
                .collect(),
            sanitizer.sanitize(&raw.difficulty),
            sanitizer.sanitize(&raw.category),
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn incorrect_answers(&self) -> &[String] {
        &self.incorrect_answers
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Total number of answer options (correct + incorrect)
    pub fn option_count(&self) -> usize {
        self.incorrect_answers.len() + 1
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
