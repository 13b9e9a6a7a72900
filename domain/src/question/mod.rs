//! Trivia questions and their presentation-time answer options.
//!
//! - [`entities::RawQuestion`]: a record as delivered by the question bank
//! - [`entities::Question`]: a sanitized, validated question
//! - [`options::AnswerOptions`]: shuffled options with the tracked correct index
//! - [`sanitizer::TextSanitizer`]: decodes provider escaping in text fields

pub mod entities;
pub mod options;
pub mod sanitizer;
