pub mod config;
pub mod error;
pub mod rate_limit;
pub mod routes;
pub mod state;

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::{HeaderName, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use swap_core::{Dataset, RetryLimits};

use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;
use crate::state::AppState;

/// How often expired rate-limit windows are dropped.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(30);

/// Set on every response, overriding anything a handler wrote.
const HARDENING_HEADERS: &[(&str, &str)] = &[
    ("cache-control", "no-store"),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("permissions-policy", "camera=(), microphone=(), geolocation=()"),
    (
        "content-security-policy",
        "default-src 'none'; frame-ancestors 'none'; base-uri 'none'",
    ),
];

/// Build a fully configured Router + shared state.
pub async fn build_app(config: &ServerConfig) -> (Router, Arc<AppState>) {
    let dataset = Arc::new(Dataset::generate());
    build_app_with_dataset(config, dataset)
}

/// Same as [`build_app`] but with a caller-supplied dataset. Must run inside a Tokio runtime.
pub fn build_app_with_dataset(
    config: &ServerConfig,
    dataset: Arc<Dataset>,
) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        dataset,
        limits: RetryLimits::default(),
        limiter: RateLimiter::new(config.rate_limit),
    });

    {
        let state = state.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
            loop {
                interval.tick().await;
                state.limiter.evict_expired(Instant::now());
            }
        });
    }

    let mut app = Router::new()
        .route("/health", get(routes::health))
        .route("/puzzle", get(routes::puzzle))
        .route("/dataset/stats", get(routes::dataset_stats))
        .layer(CorsLayer::permissive());

    for &(name, value) in HARDENING_HEADERS {
        app = app.layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ));
    }

    (app.with_state(state.clone()), state)
}
