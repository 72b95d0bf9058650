//! Request spacing
//!
//! Enforces a minimum pause between the end of one request of a kind (query
//! pages or attachment downloads) and the start of the next. The first request
//! goes out immediately. A caller takes a permit with [`RateLimiter::acquire`]
//! before sending and stamps the finish with [`RateLimiter::complete`] once the
//! response is in, so a slow server stretches the spacing instead of eating it.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// Minimum-pause rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    interval: Duration,
    last_completed: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a limiter that keeps `interval` between a finished request and the next one
    pub fn min_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_completed: Arc::new(Mutex::new(None)),
        }
    }

    /// Wait until a request may be issued
    ///
    /// Returns the time spent waiting.
    pub async fn acquire(&self) -> Duration {
        let last = *self.last_completed.lock().await;
        let now = Instant::now();

        match last {
            Some(previous) if previous + self.interval > now => {
                let ready_at = previous + self.interval;
                let wait = ready_at - now;
                debug!("Rate limiter waiting {:?}", wait);
                sleep_until(ready_at).await;
                wait
            }
            _ => Duration::ZERO,
        }
    }

    /// Record that a request has just finished
    pub async fn complete(&self) {
        *self.last_completed.lock().await = Some(Instant::now());
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("interval", &self.interval)
            .finish()
    }
}
