//! Game settings value object

use crate::catalog::category::CategoryGroup;
use crate::catalog::difficulty::DifficultyChoice;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Smallest number of questions a player may request
pub const MIN_QUESTIONS: usize = 5;

/// Largest number of questions a player may request
pub const MAX_QUESTIONS: usize = 50;

/// Allowed question counts
pub const QUESTION_COUNT_RANGE: RangeInclusive<usize> = MIN_QUESTIONS..=MAX_QUESTIONS;

/// The player's choices for one game (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    question_count: usize,
    category: CategoryGroup,
    difficulty: DifficultyChoice,
}

impl GameSettings {
    /// Create validated settings.
    ///
    /// Fails if `question_count` is outside [`QUESTION_COUNT_RANGE`].
    pub fn new(
        question_count: usize,
        category: CategoryGroup,
        difficulty: DifficultyChoice,
    ) -> Result<Self, DomainError> {
        if !QUESTION_COUNT_RANGE.contains(&question_count) {
            return Err(DomainError::QuestionCountOutOfRange {
                count: question_count,
                min: MIN_QUESTIONS,
                max: MAX_QUESTIONS,
            });
        }
        Ok(Self {
            question_count,
            category,
            difficulty,
        })
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn category(&self) -> CategoryGroup {
        self.category
    }

    pub fn difficulty(&self) -> DifficultyChoice {
        self.difficulty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_settings() {
        let settings =
            GameSettings::new(10, CategoryGroup::Science, DifficultyChoice::Hard).unwrap();
        assert_eq!(settings.question_count(), 10);
        assert_eq!(settings.category(), CategoryGroup::Science);
        assert_eq!(settings.difficulty(), DifficultyChoice::Hard);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(GameSettings::new(5, CategoryGroup::Random, DifficultyChoice::Mixed).is_ok());
        assert!(GameSettings::new(50, CategoryGroup::Random, DifficultyChoice::Mixed).is_ok());
    }

    #[test]
    fn test_out_of_range_count_rejected() {
        let err = GameSettings::new(4, CategoryGroup::Random, DifficultyChoice::Mixed).unwrap_err();
        assert_eq!(
            err,
            DomainError::QuestionCountOutOfRange {
                count: 4,
                min: 5,
                max: 50
            }
        );
        assert!(GameSettings::new(51, CategoryGroup::Random, DifficultyChoice::Mixed).is_err());
    }
}
