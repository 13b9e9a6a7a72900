//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod assemble_questions;
pub mod play_game;

#[cfg(test)]
pub(crate) mod test_support;
