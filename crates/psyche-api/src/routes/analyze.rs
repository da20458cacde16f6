//! Situation analysis endpoint.

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use psyche_protocol::arcana;

/// Request body for an analysis.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Free-text situation description.
    pub situation: String,
}

/// Resolved reading joined with the selected card's display data.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Request trace id (UUIDv7 for time-sortability).
    pub id: Uuid,
    pub card_id: u8,
    pub card_name: &'static str,
    pub archetype: &'static str,
    pub image_url: &'static str,
    pub interpretation: String,
    pub analyzed_at: DateTime<Utc>,
}

/// POST /api/v1/analyze — resolve a situation into a reading.
///
/// Input-precondition violations map to 400; every remote failure is
/// already absorbed below this layer, so a valid request always answers 200.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let reading = state.resolver.resolve(&req.situation).await?;

    let card = arcana::card(reading.card_id)
        .ok_or_else(|| ApiError::Internal(format!("no card for id {}", reading.card_id)))?;

    tracing::info!(card_id = card.id, card = card.name, "situation resolved");

    Ok(Json(AnalyzeResponse {
        id: Uuid::now_v7(),
        card_id: card.id,
        card_name: card.name,
        archetype: card.archetype,
        image_url: card.image_url,
        interpretation: reading.interpretation,
        analyzed_at: Utc::now(),
    }))
}
