//! Client-side rate limiting
//!
//! Enforces a minimum interval between requests, independent of and
//! additive to any server-side throttling. One limiter is shared by every
//! dispatch through a client; cloning shares the underlying state.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Configuration for rate limiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimiterConfig {
    /// Minimum time between consecutive requests
    pub min_interval: Duration,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_millis(1000),
        }
    }
}

impl RateLimiterConfig {
    /// Create a config with the given minimum interval
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }

    /// Config matching the API guidance for unauthenticated clients (2s)
    pub fn conservative() -> Self {
        Self {
            min_interval: Duration::from_millis(2000),
        }
    }
}

/// Minimum-interval rate limiter
///
/// `acquire()` suspends the caller until one interval has passed since the
/// previous release, then records the release time. The lock is held across
/// the sleep, so concurrent callers are released one per interval window in
/// FIFO arrival order (the tokio mutex queues waiters fairly) and none is
/// starved.
#[derive(Clone)]
pub struct RateLimiter {
    last_release: Arc<Mutex<Option<Instant>>>,
    min_interval: Duration,
}

impl RateLimiter {
    /// Create a new rate limiter with the given config
    pub fn new(config: RateLimiterConfig) -> Self {
        Self {
            last_release: Arc::new(Mutex::new(None)),
            min_interval: config.min_interval,
        }
    }

    /// Wait until a request may be made, then claim the current window
    pub async fn acquire(&self) {
        let mut last = self.last_release.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// The configured minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimiterConfig::default())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("min_interval", &self.min_interval)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod rate_limit_tests {
    use super::*;

    #[test]
    fn test_rate_limiter_config_default() {
        let config = RateLimiterConfig::default();
        assert_eq!(config.min_interval, Duration::from_millis(1000));
    }

    #[test]
    fn test_rate_limiter_config_conservative() {
        let config = RateLimiterConfig::conservative();
        assert_eq!(config.min_interval, Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_first_acquire_is_immediate() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(Duration::from_secs(10)));
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_acquire_waits_full_interval() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(Duration::from_millis(500)));

        limiter.acquire().await;
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_acquires_release_one_per_window() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(Duration::from_millis(200)));
        let start = Instant::now();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                limiter.acquire().await;
                Instant::now()
            }));
        }

        let mut release_times = Vec::new();
        for handle in handles {
            release_times.push(handle.await.unwrap());
        }
        release_times.sort();

        // No two releases within the same interval window
        for pair in release_times.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(200));
        }
        // Last caller waited three full windows behind the first
        assert!(release_times[3] - start >= Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_state() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(Duration::from_millis(300)));
        let clone = limiter.clone();

        limiter.acquire().await;
        let start = Instant::now();
        clone.acquire().await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test]
    async fn test_idle_limiter_does_not_delay() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(Duration::from_millis(50)));
        limiter.acquire().await;
        tokio::time::sleep(Duration::from_millis(60)).await;

        // Interval already elapsed while idle
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
