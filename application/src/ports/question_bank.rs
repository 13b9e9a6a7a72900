//! Question bank port
//!
//! Defines the interface for fetching raw question records from a remote
//! provider.

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::{FetchDescriptor, RawQuestion};

/// Errors that can occur while fetching from a question bank
///
/// None of these is fatal to a game: the assembler logs them and treats
/// the descriptor as having produced no records.
#[derive(Error, Debug)]
pub enum QuestionBankError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Request rejected by provider: {0}")]
    Rejected(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Source of raw trivia questions
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QuestionBank: Send + Sync {
    /// Fetch up to `descriptor.amount()` records matching the descriptor.
    ///
    /// Returning fewer records than requested is allowed.
    async fn fetch(
        &self,
        descriptor: &FetchDescriptor,
    ) -> Result<Vec<RawQuestion>, QuestionBankError>;
}
