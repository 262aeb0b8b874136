use std::time::Instant;

use dashmap::DashMap;

use crate::config::RateLimitConfig;

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: Instant,
}

/// Per-client fixed-window request counters.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: DashMap<String, Window>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        RateLimiter {
            config,
            windows: DashMap::new(),
        }
    }

    /// Count a request from `key`. On rejection returns the seconds until the
    /// window resets, at least 1.
    pub fn check(&self, key: &str, now: Instant) -> Result<(), u64> {
        let mut window = self.windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            reset_at: now + self.config.window,
        });
        if window.reset_at <= now {
            window.count = 0;
            window.reset_at = now + self.config.window;
        }
        window.count += 1;

        if window.count > self.config.max_requests {
            let remaining = window.reset_at.saturating_duration_since(now);
            let secs = remaining.as_millis().div_ceil(1000) as u64;
            return Err(secs.max(1));
        }
        Ok(())
    }

    /// Drop windows that have already reset.
    pub fn evict_expired(&self, now: Instant) {
        self.windows.retain(|_, w| w.reset_at > now);
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn limiter(max_requests: u32, window_ms: u64) -> RateLimiter {
        RateLimiter::new(RateLimitConfig {
            max_requests,
            window: Duration::from_millis(window_ms),
        })
    }

    #[test]
    fn allows_up_to_the_limit() {
        let rl = limiter(3, 60_000);
        let now = Instant::now();
        assert!(rl.check("a", now).is_ok());
        assert!(rl.check("a", now).is_ok());
        assert!(rl.check("a", now).is_ok());
        assert_eq!(rl.check("a", now), Err(60));
    }

    #[test]
    fn keys_are_independent() {
        let rl = limiter(1, 60_000);
        let now = Instant::now();
        assert!(rl.check("a", now).is_ok());
        assert!(rl.check("a", now).is_err());
        assert!(rl.check("b", now).is_ok());
    }

    #[test]
    fn window_resets() {
        let rl = limiter(1, 1_000);
        let now = Instant::now();
        assert!(rl.check("a", now).is_ok());
        assert!(rl.check("a", now + Duration::from_millis(500)).is_err());
        assert!(rl.check("a", now + Duration::from_millis(1_000)).is_ok());
    }

    #[test]
    fn retry_after_is_at_least_one_second() {
        let rl = limiter(1, 1_000);
        let now = Instant::now();
        rl.check("a", now).unwrap();
        assert_eq!(rl.check("a", now + Duration::from_millis(999)), Err(1));
    }

    #[test]
    fn evicts_expired_windows() {
        let rl = limiter(5, 1_000);
        let now = Instant::now();
        rl.check("a", now).unwrap();
        rl.check("b", now + Duration::from_millis(800)).unwrap();
        rl.evict_expired(now + Duration::from_millis(1_200));
        assert_eq!(rl.tracked_clients(), 1);
    }
}
