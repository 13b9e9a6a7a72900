//! Session score tracking

use serde::{Deserialize, Serialize};

/// Outcome of a single answered question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// Running score of one playthrough
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub correct: usize,
    pub incorrect: usize,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one answer
    pub fn record(&mut self, outcome: AnswerOutcome) {
        match outcome {
            AnswerOutcome::Correct => self.correct += 1,
            AnswerOutcome::Incorrect => self.incorrect += 1,
        }
    }

    /// Back to 0/0 for a new playthrough
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn answered(&self) -> usize {
        self.correct + self.incorrect
    }
}
