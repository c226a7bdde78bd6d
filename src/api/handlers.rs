//! Request Handlers
//!
//! Thin wrappers over the slot engine. Requests share nothing but the
//! immutable symbol pool and the random source handle.

use super::{
    errors::ApiError,
    middleware::RequestId,
    models::*,
};
use crate::slot::{self, RandomSource};
use axum::{extract::State, http::Uri, Extension, Json};
use std::sync::Arc;
use tracing::{debug, info};

/// Shared application state
pub struct AppState {
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }
}

/// Health check handler
/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Single play
/// GET /play
pub async fn play_handler(
    Extension(request_id): Extension<RequestId>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlayResponse>, ApiError> {
    info!(request_id = %request_id.0, "Received request for /play");

    let spin = slot::play(state.random.as_ref()).map_err(|e| {
        ApiError::internal_error(request_id.0.clone(), format!("Error generating fruits: {}", e))
    })?;

    debug!(
        request_id = %request_id.0,
        fruits = ?spin.symbols,
        win = spin.outcome.is_win(),
        "Spin result"
    );

    Ok(Json(PlayResponse::from(spin)))
}

/// Batch play of ten spins, all or nothing
/// GET /play/10
pub async fn play_batch_handler(
    Extension(request_id): Extension<RequestId>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<BatchPlayResponse>, ApiError> {
    info!(request_id = %request_id.0, "Received request for /play/10");

    let batch = slot::play_batch(state.random.as_ref()).map_err(|e| {
        ApiError::internal_error(
            request_id.0.clone(),
            format!("Error generating fruits for batch: {}", e),
        )
    })?;

    for (i, spin) in batch.spins.iter().enumerate() {
        debug!(
            request_id = %request_id.0,
            spin = i + 1,
            fruits = ?spin.symbols,
            win = spin.outcome.is_win(),
            "Spin result"
        );
    }
    info!(
        request_id = %request_id.0,
        "Completed {} spins. Total wins: {}",
        batch.spins.len(),
        batch.win_count
    );

    Ok(Json(BatchPlayResponse::from(batch)))
}

/// Fallback for unknown routes
pub async fn not_found_handler(Extension(request_id): Extension<RequestId>, uri: Uri) -> ApiError {
    ApiError::not_found(request_id.0, uri.path().to_string())
}
