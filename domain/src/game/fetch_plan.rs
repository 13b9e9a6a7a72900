//! Fetch planning: turning game settings into units of fetch work.
//!
//! No I/O happens here. The question bank adapter decides how a
//! [`FetchDescriptor`] is put on the wire.

use super::distribution::allocate;
use super::settings::GameSettings;
use crate::catalog::category::SubCategoryId;
use crate::catalog::difficulty::Difficulty;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One unit of fetch work for the question bank (Value Object)
///
/// `amount` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchDescriptor {
    sub_category: Option<SubCategoryId>,
    difficulty: Option<Difficulty>,
    amount: usize,
}

impl FetchDescriptor {
    /// Create a descriptor, returning `None` for a zero amount
    pub fn new(
        sub_category: Option<SubCategoryId>,
        difficulty: Option<Difficulty>,
        amount: usize,
    ) -> Option<Self> {
        (amount > 0).then_some(Self {
            sub_category,
            difficulty,
            amount,
        })
    }

    /// Sub-category filter, `None` for an unfiltered (random) fetch
    pub fn sub_category(&self) -> Option<SubCategoryId> {
        self.sub_category
    }

    /// Difficulty filter, `None` for any difficulty
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn amount(&self) -> usize {
        self.amount
    }
}

impl fmt::Display for FetchDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} question(s)", self.amount)?;
        match self.sub_category {
            Some(id) => write!(f, " from category {}", id)?,
            None => write!(f, " from any category")?,
        }
        match self.difficulty {
            Some(d) => write!(f, " ({})", d),
            None => write!(f, " (any difficulty)"),
        }
    }
}

/// Build the fetch descriptors for a game.
///
/// - Random group: a single unfiltered descriptor for the whole count.
/// - Other groups: one descriptor per sub-category, in table order, with
///   the amount from [`allocate`]. Zero allocations are skipped.
///
/// The difficulty filter is attached to every descriptor unless the
/// player picked mixed difficulty.
pub fn plan_fetches(settings: &GameSettings) -> Vec<FetchDescriptor> {
    let difficulty = settings.difficulty().filter();
    let count = settings.question_count();

    if settings.category().is_random() {
        return FetchDescriptor::new(None, difficulty, count)
            .into_iter()
            .collect();
    }

    let sub_categories = settings.category().sub_categories();
    sub_categories
        .iter()
        .zip(allocate(count, sub_categories.len()))
        .filter_map(|(&id, amount)| FetchDescriptor::new(Some(id), difficulty, amount))
        .collect()
}
