use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use swap_core::protocol::PuzzleQuery;
use swap_core::{BoardSize, ContentProfile, DatasetStats, GamePuzzle, Language, PuzzleBuilder};

use crate::error::ApiError;
use crate::state::AppState;

/// Header set by the edge proxy with the real client address.
const CLIENT_IP_HEADER: &str = "cf-connecting-ip";

// ── Health ──────────────────────────────────────────────────────────────

pub async fn health() -> &'static str {
    "ok"
}

// ── Puzzle ──────────────────────────────────────────────────────────────

fn client_key(headers: &HeaderMap) -> String {
    headers
        .get(CLIENT_IP_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Clamp raw query values to supported inputs. Only a non-numeric size is rejected.
pub fn resolve_query(
    query: &PuzzleQuery,
) -> Result<(Language, BoardSize, ContentProfile), ApiError> {
    let language = query
        .lang
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or(Language::En);

    let size = match query.size.as_deref() {
        Some(raw) if !raw.is_empty() && !raw.bytes().all(|b| b.is_ascii_digit()) => {
            return Err(ApiError::InvalidSize);
        }
        Some(raw) => raw.parse().unwrap_or(BoardSize::Five),
        None => BoardSize::Five,
    };

    let profile = query
        .profile
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();

    Ok((language, size, profile))
}

pub async fn puzzle(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<PuzzleQuery>,
) -> Result<Json<GamePuzzle>, ApiError> {
    let key = client_key(&headers);
    if let Err(retry_after) = state.limiter.check(&key, Instant::now()) {
        tracing::warn!(client = %key, retry_after, "rate limited");
        return Err(ApiError::RateLimited { retry_after });
    }

    let (language, size, profile) = resolve_query(&query)?;

    let report = PuzzleBuilder::new(state.dataset.as_ref())
        .with_limits(state.limits)
        .build_report(language, size, profile, &mut rand::rng());

    tracing::info!(
        %language,
        %size,
        %profile,
        difficulty = report.puzzle.difficulty.label(),
        used_fallback = report.used_fallback,
        grid_unique = report.grid_unique,
        "served puzzle"
    );

    Ok(Json(report.puzzle))
}

// ── Dataset stats ───────────────────────────────────────────────────────

pub async fn dataset_stats(State(state): State<Arc<AppState>>) -> Json<DatasetStats> {
    Json(state.dataset.stats())
}
