//! Infrastructure layer for trivia-quorum
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod opentdb;
pub mod sanitize;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileOutputConfig};
pub use opentdb::{
    bank::OpenTdbQuestionBank,
    error::{OpenTdbError, Result},
    protocol::DEFAULT_BASE_URL,
};
pub use sanitize::HtmlEntitySanitizer;
