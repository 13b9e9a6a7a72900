//! Request pacing for the Open Trivia DB rate limit.
//!
//! The public endpoint accepts one request per client every few seconds.
//! [`RequestPacer`] spaces requests out; [`retry_rate_limited`] sends a
//! request again when the provider still answers with a rate-limit code.

use super::error::Result;
use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Enforces a minimum interval between request starts.
///
/// Callers queue on the lock, so concurrent fetches are sent one at a time.
pub struct RequestPacer {
    interval: Duration,
    last_sent: Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_sent: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the interval since the previous request has passed, then
    /// claim the slot for the caller's request.
    pub async fn wait_turn(&self) {
        if self.interval.is_zero() {
            return;
        }

        let mut last_sent = self.last_sent.lock().await;
        if let Some(previous) = *last_sent {
            let ready = previous + self.interval;
            if ready > Instant::now() {
                debug!(
                    "Pacing request, waiting {:?}",
                    ready.saturating_duration_since(Instant::now())
                );
                tokio::time::sleep_until(ready).await;
            }
        }
        *last_sent = Some(Instant::now());
    }
}

/// Run `send` after waiting for the pacer, sending again up to `max_retries`
/// times while the provider reports a rate limit.
pub async fn retry_rate_limited<T, F, Fut>(
    pacer: &RequestPacer,
    max_retries: u32,
    mut send: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut retries = 0;
    loop {
        pacer.wait_turn().await;
        match send().await {
            Err(e) if e.is_rate_limited() && retries < max_retries => {
                retries += 1;
                warn!(
                    "Question bank rate limit hit, retrying ({}/{})",
                    retries, max_retries
                );
            }
            result => return result,
        }
    }
}
