//! Terminal implementation of the game console

pub mod prompt;
pub mod terminal;
