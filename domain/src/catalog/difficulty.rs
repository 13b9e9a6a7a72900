//! Difficulty menu and provider difficulty filter

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A provider difficulty level, as sent in a fetch request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Query-string value understood by the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The player's difficulty choice.
///
/// `Mixed` omits the difficulty filter entirely; the provider then serves
/// questions of any difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyChoice {
    Easy,
    Medium,
    Hard,
    #[default]
    Mixed,
}

impl DifficultyChoice {
    /// All choices in menu order
    pub const ALL: [DifficultyChoice; 4] = [
        DifficultyChoice::Easy,
        DifficultyChoice::Medium,
        DifficultyChoice::Hard,
        DifficultyChoice::Mixed,
    ];

    pub fn menu_number(&self) -> u32 {
        match self {
            DifficultyChoice::Easy => 1,
            DifficultyChoice::Medium => 2,
            DifficultyChoice::Hard => 3,
            DifficultyChoice::Mixed => 4,
        }
    }

    pub fn from_menu_number(number: u32) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.menu_number() == number)
            .ok_or(DomainError::UnknownDifficulty(number))
    }

    /// The filter to attach to fetch requests, `None` for mixed
    pub fn filter(&self) -> Option<Difficulty> {
        match self {
            DifficultyChoice::Easy => Some(Difficulty::Easy),
            DifficultyChoice::Medium => Some(Difficulty::Medium),
            DifficultyChoice::Hard => Some(Difficulty::Hard),
            DifficultyChoice::Mixed => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyChoice::Easy => "easy",
            DifficultyChoice::Medium => "medium",
            DifficultyChoice::Hard => "hard",
            DifficultyChoice::Mixed => "mixed",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            DifficultyChoice::Easy => "Easy",
            DifficultyChoice::Medium => "Medium",
            DifficultyChoice::Hard => "Hard",
            DifficultyChoice::Mixed => "Mixed Difficulty",
        }
    }
}

impl fmt::Display for DifficultyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
