//! Static catalog of what a player can ask for.
//!
//! The tables here are process-wide constants: they are built into the
//! binary and never mutated, so they need no synchronization.
//!
//! - [`category::CategoryGroup`]: user-facing category groups and the
//!   provider sub-categories behind each one
//! - [`difficulty::DifficultyChoice`]: difficulty menu, including "mixed"

pub mod category;
pub mod difficulty;
