use axum::http::header::RETRY_AFTER;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use swap_core::protocol::ErrorBody;

/// Transport-level failures. The engine itself never fails.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("size must be numeric")]
    InvalidSize,
    #[error("rate limited, retry in {retry_after}s")]
    RateLimited { retry_after: u64 },
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidSize => "invalid_size",
            ApiError::RateLimited { .. } => "rate_limited",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody::new(self.code()));
        match self {
            ApiError::InvalidSize => (StatusCode::BAD_REQUEST, body).into_response(),
            ApiError::RateLimited { retry_after } => (
                StatusCode::TOO_MANY_REQUESTS,
                [(RETRY_AFTER, retry_after.to_string())],
                body,
            )
                .into_response(),
        }
    }
}
