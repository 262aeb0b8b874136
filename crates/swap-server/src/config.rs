use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_REQUESTS: u32 = 120;
pub const DEFAULT_WINDOW_MS: u64 = 60_000;

/// Fixed-window rate limit applied per client key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        RateLimitConfig {
            max_requests: DEFAULT_MAX_REQUESTS,
            window: Duration::from_millis(DEFAULT_WINDOW_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub rate_limit: RateLimitConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            rate_limit: RateLimitConfig::default(),
        }
    }
}

/// Parse a strictly positive number; anything else falls back to the default.
fn positive<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + Default,
{
    raw.and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
        .unwrap_or(default)
}

impl ServerConfig {
    /// Read `PORT`, `RATE_LIMIT_MAX_REQUESTS` and `RATE_LIMIT_WINDOW_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        ServerConfig {
            port: positive(lookup("PORT"), DEFAULT_PORT),
            rate_limit: RateLimitConfig {
                max_requests: positive(lookup("RATE_LIMIT_MAX_REQUESTS"), DEFAULT_MAX_REQUESTS),
                window: Duration::from_millis(positive(
                    lookup("RATE_LIMIT_WINDOW_MS"),
                    DEFAULT_WINDOW_MS,
                )),
            },
        }
    }
}
