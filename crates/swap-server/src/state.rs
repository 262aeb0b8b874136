use std::sync::Arc;

use swap_core::{Dataset, RetryLimits};

use crate::rate_limit::RateLimiter;

/// Shared application state. The dataset is read-only after startup.
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub limits: RetryLimits,
    pub limiter: RateLimiter,
}
