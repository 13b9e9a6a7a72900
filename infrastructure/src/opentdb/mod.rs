//! Open Trivia DB adapter
//!
//! Implements [`QuestionBank`](trivia_application::QuestionBank) over the
//! public Open Trivia DB HTTP API.

pub mod bank;
pub mod error;
pub mod pacing;
pub mod protocol;
