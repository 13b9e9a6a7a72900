//! Error types for the Open Trivia DB adapter

use super::protocol::ResponseCode;
use thiserror::Error;
use trivia_application::QuestionBankError;

/// Result type alias for Open Trivia DB operations
pub type Result<T> = std::result::Result<T, OpenTdbError>;

/// Errors that can occur when talking to Open Trivia DB
#[derive(Error, Debug)]
pub enum OpenTdbError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {status}")]
    Status { status: u16 },

    #[error("Provider response code {code}: {description}")]
    ResponseCode { code: u8, description: &'static str },
}

impl OpenTdbError {
    /// The provider refused the request because it came too soon after the previous one
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            OpenTdbError::ResponseCode { code, .. }
                if ResponseCode::from(*code) == ResponseCode::RateLimit
        )
    }
}

impl From<OpenTdbError> for QuestionBankError {
    fn from(error: OpenTdbError) -> Self {
        match error {
            OpenTdbError::Request(e) if e.is_timeout() => QuestionBankError::Timeout,
            OpenTdbError::Request(e) if e.is_decode() => {
                QuestionBankError::MalformedPayload(e.to_string())
            }
            OpenTdbError::Request(e) => QuestionBankError::ConnectionError(e.to_string()),
            OpenTdbError::Status { status } => QuestionBankError::HttpStatus(status),
            e @ OpenTdbError::ResponseCode { .. } => QuestionBankError::Rejected(e.to_string()),
            e @ OpenTdbError::InvalidBaseUrl { .. } => QuestionBankError::Other(e.to_string()),
        }
    }
}
