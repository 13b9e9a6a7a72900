//! Shuffled answer options for presenting a question.
//!
//! [`AnswerOptions::shuffled`] returns a fresh value: the list shown to the
//! player and the index used for scoring come from the same shuffle, and
//! the [`Question`] itself is never reordered.

use super::entities::Question;
use crate::game::stats::AnswerOutcome;
use rand::Rng;
use rand::seq::SliceRandom;

/// Answer options for one presentation of a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOptions {
    options: Vec<String>,
    correct_index: usize,
}

impl AnswerOptions {
    /// Combine the incorrect answers with the correct one and shuffle them
    /// uniformly, tracking where the correct answer ended up.
    pub fn shuffled<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Self {
        let mut tagged: Vec<(bool, &str)> = Vec::with_capacity(question.option_count());
        tagged.extend(
            question
                .incorrect_answers()
                .iter()
                .map(|answer| (false, answer.as_str())),
        );
        tagged.push((true, question.correct_answer()));
        tagged.shuffle(rng);

        // The tag, not the text, identifies the correct slot: an incorrect
        // answer may share its wording.
        let correct_index = tagged
            .iter()
            .position(|(is_correct, _)| *is_correct)
            .unwrap_or_default();

        Self {
            options: tagged.into_iter().map(|(_, text)| text.to_string()).collect(),
            correct_index,
        }
    }

    /// Options in presentation order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Score a 1-based selection
    pub fn judge(&self, selection: usize) -> AnswerOutcome {
        if selection.checked_sub(1) == Some(self.correct_index) {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }

    /// Text of the correct option, for revealing after the answer
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }
}
