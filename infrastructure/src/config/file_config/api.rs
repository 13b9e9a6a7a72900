//! Question bank configuration from TOML (`[api]` section)

use crate::opentdb::protocol::{DEFAULT_BASE_URL, MIN_REQUEST_INTERVAL, RATE_LIMIT_RETRIES};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;
use trivia_application::{FetchMode, FetchParams};

/// Raw question bank configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Endpoint the fetch descriptors are rendered against
    pub base_url: String,
    /// Per-fetch timeout in seconds, including time spent waiting for pacing
    pub timeout_seconds: u64,
    /// Minimum spacing between request starts; 0 disables pacing
    pub min_request_interval_ms: u64,
    /// How often a rate-limited request is sent again
    pub rate_limit_retries: u32,
    /// Fetch all sub-categories at once instead of one after another.
    /// Only honored when pacing is disabled.
    pub concurrent_fetch: bool,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 20,
            min_request_interval_ms: MIN_REQUEST_INTERVAL.as_millis() as u64,
            rate_limit_retries: RATE_LIMIT_RETRIES,
            concurrent_fetch: false,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.min_request_interval_ms)
    }

    /// Paced requests are sent one at a time, so concurrent dispatch would
    /// only queue fetches behind each other and run them into the timeout.
    pub fn fetch_mode(&self) -> FetchMode {
        if !self.concurrent_fetch {
            return FetchMode::Sequential;
        }
        if self.min_request_interval_ms > 0 {
            warn!(
                "Concurrent fetching needs api.min_request_interval_ms = 0; fetching sequentially"
            );
            return FetchMode::Sequential;
        }
        FetchMode::Concurrent
    }

    pub fn fetch_params(&self) -> FetchParams {
        let mode = self.fetch_mode();
        FetchParams::default()
            .with_timeout(Some(self.timeout()))
            .with_mode(mode)
    }
}
