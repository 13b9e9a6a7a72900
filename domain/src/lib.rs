//! Domain layer for trivia-quorum
//!
//! This crate contains the core game logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question set assembly
//!
//! A player picks a [`CategoryGroup`], which fans out to one or more provider
//! sub-categories. The requested question count is split across them by
//! [`allocate`], and [`plan_fetches`] turns the result into
//! [`FetchDescriptor`]s for the question bank.
//!
//! ## Scoring
//!
//! Each [`Question`] is shown through freshly shuffled [`AnswerOptions`];
//! the options judge a 1-based selection into an [`AnswerOutcome`] that is
//! tallied in [`SessionStats`].

pub mod catalog;
pub mod core;
pub mod game;
pub mod question;

// Re-export commonly used types
pub use catalog::{
    category::{CategoryGroup, SubCategoryId},
    difficulty::{Difficulty, DifficultyChoice},
};
pub use self::core::error::DomainError;
pub use game::{
    distribution::allocate,
    fetch_plan::{FetchDescriptor, plan_fetches},
    settings::{GameSettings, MAX_QUESTIONS, MIN_QUESTIONS, QUESTION_COUNT_RANGE},
    stats::{AnswerOutcome, SessionStats},
};
pub use question::{
    entities::{Question, RawQuestion},
    options::AnswerOptions,
    sanitizer::{TextSanitizer, VerbatimText},
};
