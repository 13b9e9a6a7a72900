//! Category groups and their provider sub-categories.
//!
//! | # | Group | Open Trivia DB categories |
//! |---|-------|---------------------------|
//! | 1 | General Knowledge | 9 |
//! | 2 | Entertainment | 10-16, 21, 26, 29, 31, 32 |
//! | 3 | Science | 17, 18, 19, 27, 30 |
//! | 4 | History and the World | 20, 22, 23, 24, 25 |
//! | 5 | Random | no filter |
//!
//! Order inside each list matters: the distributor hands the remainder of
//! an uneven split to the first sub-categories listed.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-specific question category identifier (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubCategoryId(u32);

impl SubCategoryId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SubCategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const fn ids<const N: usize>(raw: [u32; N]) -> [SubCategoryId; N] {
    let mut out = [SubCategoryId(0); N];
    let mut i = 0;
    while i < N {
        out[i] = SubCategoryId(raw[i]);
        i += 1;
    }
    out
}

// Books, Film, Music, Theatre, TV, Video Games, Board Games, Sports,
// Celebrities, Comics, Anime, Cartoons
static ENTERTAINMENT: [SubCategoryId; 12] = ids([10, 11, 12, 13, 14, 15, 16, 21, 26, 29, 31, 32]);
// Science & Nature, Computers, Mathematics, Animals, Gadgets
static SCIENCE: [SubCategoryId; 5] = ids([17, 18, 19, 27, 30]);
// Mythology, Geography, History, Politics, Art
static HISTORY_AND_WORLD: [SubCategoryId; 5] = ids([20, 22, 23, 24, 25]);
static GENERAL_KNOWLEDGE: [SubCategoryId; 1] = ids([9]);

/// A user-facing category group
///
/// Every group except [`CategoryGroup::Random`] aggregates one or more
/// provider sub-categories. `Random` means "no category filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    GeneralKnowledge,
    Entertainment,
    Science,
    HistoryAndWorld,
    #[default]
    Random,
}

impl CategoryGroup {
    /// All groups in menu order
    pub const ALL: [CategoryGroup; 5] = [
        CategoryGroup::GeneralKnowledge,
        CategoryGroup::Entertainment,
        CategoryGroup::Science,
        CategoryGroup::HistoryAndWorld,
        CategoryGroup::Random,
    ];

    /// Number shown next to this group in the category menu (1-based)
    pub fn menu_number(&self) -> u32 {
        match self {
            CategoryGroup::GeneralKnowledge => 1,
            CategoryGroup::Entertainment => 2,
            CategoryGroup::Science => 3,
            CategoryGroup::HistoryAndWorld => 4,
            CategoryGroup::Random => 5,
        }
    }

    /// Look up a group by its menu number
    pub fn from_menu_number(number: u32) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|group| group.menu_number() == number)
            .ok_or(DomainError::UnknownCategory(number))
    }

    /// Provider sub-categories for this group, in distribution order.
    ///
    /// Empty for [`CategoryGroup::Random`].
    pub fn sub_categories(&self) -> &'static [SubCategoryId] {
        match self {
            CategoryGroup::GeneralKnowledge => &GENERAL_KNOWLEDGE,
            CategoryGroup::Entertainment => &ENTERTAINMENT,
            CategoryGroup::Science => &SCIENCE,
            CategoryGroup::HistoryAndWorld => &HISTORY_AND_WORLD,
            CategoryGroup::Random => &[],
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, CategoryGroup::Random)
    }

    /// Lowercase label used in running text ("history and the world")
    pub fn label(&self) -> &'static str {
        match self {
            CategoryGroup::GeneralKnowledge => "general knowledge",
            CategoryGroup::Entertainment => "entertainment",
            CategoryGroup::Science => "science",
            CategoryGroup::HistoryAndWorld => "history and the world",
            CategoryGroup::Random => "random",
        }
    }

    /// Title-cased label used in menus
    pub fn menu_label(&self) -> &'static str {
        match self {
            CategoryGroup::GeneralKnowledge => "General Knowledge",
            CategoryGroup::Entertainment => "Entertainment",
            CategoryGroup::Science => "Science",
            CategoryGroup::HistoryAndWorld => "History and The World",
            CategoryGroup::Random => "Random",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
