//! Minimum-interval rate limiter for upstream calls.
//!
//! The upstream allows roughly 10 requests per minute, so every outbound
//! call is spaced at least `min_interval` after the previous one. The
//! limiter is an explicit object shared through `Arc`, not ambient state,
//! so tests and independent clients can each own one.

use std::time::Duration;

use log::debug;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Default spacing: 6 seconds keeps us at 10 requests per minute.
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(6);

/// Rate limiter configuration.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    /// Minimum wall-clock gap between two outbound calls.
    pub min_interval: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            min_interval: DEFAULT_MIN_INTERVAL,
        }
    }
}

/// Process-wide pacing for outbound calls.
///
/// The check-elapsed, sleep, stamp sequence runs while holding a single
/// async mutex, so two callers can never both observe a stale timestamp and
/// burst past the ceiling. Waiters are served in FIFO order by the mutex.
/// Dropping an `await_slot` future mid-wait releases the lock without
/// stamping.
pub struct RateLimiter {
    /// When the last slot was handed out, `None` before the first call.
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    /// Create a limiter with the default 6 second spacing.
    pub fn new() -> Self {
        Self::with_config(RateLimitConfig::default())
    }

    pub fn with_config(config: RateLimitConfig) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval: config.min_interval,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until a call is allowed, then claim the slot.
    pub async fn await_slot(&self) {
        let mut last_request = self.last_request.lock().await;

        if let Some(previous) = *last_request {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                debug!("Rate limiter: waiting {:?} before next request", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        *last_request = Some(Instant::now());
    }

    /// Claim a slot only if one is free right now.
    ///
    /// Returns false when the interval has not elapsed or another caller is
    /// currently waiting for its slot.
    pub fn try_acquire(&self) -> bool {
        let Ok(mut last_request) = self.last_request.try_lock() else {
            return false;
        };

        let ready = match *last_request {
            Some(previous) => previous.elapsed() >= self.min_interval,
            None => true,
        };

        if ready {
            *last_request = Some(Instant::now());
        }
        ready
    }

    /// How long a caller arriving now would wait, ignoring queued waiters.
    ///
    /// Returns the full interval while another caller holds the lock.
    pub fn time_until_available(&self) -> Duration {
        match self.last_request.try_lock() {
            Ok(last_request) => match *last_request {
                Some(previous) => self.min_interval.saturating_sub(previous.elapsed()),
                None => Duration::ZERO,
            },
            Err(_) => self.min_interval,
        }
    }

    /// Forget the last request so the next call goes through immediately.
    pub async fn reset(&self) {
        *self.last_request.lock().await = None;
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_first_slot_is_immediate() {
        let limiter = RateLimiter::new();

        let start = Instant::now();
        limiter.await_slot().await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_slot_waits_full_interval() {
        let limiter = RateLimiter::new();

        limiter.await_slot().await;
        let first = Instant::now();
        limiter.await_slot().await;

        assert!(first.elapsed() >= Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_remaining_time_is_waited() {
        let limiter = RateLimiter::new();

        limiter.await_slot().await;
        tokio::time::sleep(Duration::from_secs(4)).await;

        let before = Instant::now();
        limiter.await_slot().await;
        let waited = before.elapsed();

        assert!(waited >= Duration::from_secs(2));
        assert!(waited < Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_wait_after_interval_elapsed() {
        let limiter = RateLimiter::new();

        limiter.await_slot().await;
        tokio::time::sleep(Duration::from_secs(10)).await;

        let before = Instant::now();
        limiter.await_slot().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_callers_are_serialized() {
        let limiter = Arc::new(RateLimiter::new());

        let mut handles = Vec::new();
        for _ in 0..4 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                limiter.await_slot().await;
                Instant::now()
            }));
        }

        let mut stamps = Vec::new();
        for handle in handles {
            stamps.push(handle.await.unwrap());
        }
        stamps.sort();

        for pair in stamps.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_secs(6));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_acquire() {
        let limiter = RateLimiter::with_config(RateLimitConfig {
            min_interval: Duration::from_secs(1),
        });

        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(limiter.try_acquire());
    }

    #[tokio::test(start_paused = true)]
    async fn test_time_until_available_and_reset() {
        let limiter = RateLimiter::new();
        assert_eq!(limiter.time_until_available(), Duration::ZERO);

        limiter.await_slot().await;
        assert_eq!(limiter.time_until_available(), Duration::from_secs(6));

        limiter.reset().await;
        assert_eq!(limiter.time_until_available(), Duration::ZERO);
        assert!(limiter.try_acquire());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_never_waits() {
        let limiter = RateLimiter::with_config(RateLimitConfig {
            min_interval: Duration::ZERO,
        });

        let before = Instant::now();
        for _ in 0..5 {
            limiter.await_slot().await;
        }
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}
