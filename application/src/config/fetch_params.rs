//! Fetch parameters: question bank call control.
//!
//! [`FetchParams`] groups the static parameters that control how
//! [`AssembleQuestionsUseCase`](crate::use_cases::assemble_questions::AssembleQuestionsUseCase)
//! issues its fetches. These are application-layer concerns, not domain policy.

use std::time::Duration;

/// How descriptors are dispatched to the question bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// One fetch at a time, in table order
    #[default]
    Sequential,
    /// All fetches in flight together
    Concurrent,
}

/// Question bank call control parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParams {
    /// Upper bound for a single fetch. Expiry counts as "no records".
    pub timeout: Option<Duration>,
    /// Sequential or concurrent dispatch.
    pub mode: FetchMode,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(20)),
            mode: FetchMode::Sequential,
        }
    }
}

impl FetchParams {
    // ==================== Builder Methods ====================

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_seconds(self, seconds: u64) -> Self {
        self.with_timeout(Some(Duration::from_secs(seconds)))
    }

    pub fn with_mode(mut self, mode: FetchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn concurrent(self) -> Self {
        self.with_mode(FetchMode::Concurrent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = FetchParams::default();
        assert_eq!(params.timeout, Some(Duration::from_secs(20)));
        assert_eq!(params.mode, FetchMode::Sequential);
    }

    #[test]
    fn test_builder_chain() {
        let params = FetchParams::default().with_timeout_seconds(3).concurrent();
        assert_eq!(params.timeout, Some(Duration::from_secs(3)));
        assert_eq!(params.mode, FetchMode::Concurrent);

        let params = params.with_timeout(None);
        assert!(params.timeout.is_none());
    }
}
