//! Sentiment prediction route handlers.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, info};

use crate::error::AppError;
use crate::types::{PredictParams, PredictResponse};

use super::AppState;

/// POST /predict
///
/// Run both sentiment estimators over the `test` query parameter and
/// return their combined verdict.
pub async fn predict(
    State(state): State<AppState>,
    Query(params): Query<PredictParams>,
) -> Result<Json<PredictResponse>, AppError> {
    let text = params
        .test
        .ok_or_else(|| AppError::BadRequest("Missing 'test' query parameter".to_string()))?;

    let started = Instant::now();

    // Inference is CPU-bound; keep it off the async workers.
    let prediction = tokio::task::spawn_blocking({
        let service = state.service.clone();
        let text = text.clone();
        move || service.analyze(&text)
    })
    .await
    .map_err(|e| {
        error!(error = %e, "Prediction task panicked");
        AppError::Internal(e.to_string())
    })?
    .map_err(|e| {
        error!(error = %e, "Prediction failed");
        e
    })?;

    info!(
        text_len = text.len(),
        sentiment = %prediction.label,
        compound = prediction.lexicon.compound,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Prediction served"
    );

    Ok(Json(PredictResponse::from(prediction)))
}

/// Any non-POST method on `/predict`.
pub async fn method_not_allowed() -> (StatusCode, Json<PredictResponse>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(PredictResponse::default()))
}
