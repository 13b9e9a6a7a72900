//! Application-level configuration.
//!
//! - [`FetchParams`]: how the question set assembler talks to the question bank

pub mod fetch_params;

pub use fetch_params::{FetchMode, FetchParams};
