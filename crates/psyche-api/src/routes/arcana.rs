//! Major Arcana table endpoints — the deck data the front-end renders.

use axum::Json;
use axum::extract::Path;

use crate::error::{ApiError, ApiResult};
use psyche_protocol::arcana::{ArcanaCard, MAJOR_ARCANA, card};

/// GET /api/v1/arcana — the full 22-card table.
pub async fn list_cards() -> Json<&'static [ArcanaCard]> {
    Json(&MAJOR_ARCANA[..])
}

/// GET /api/v1/arcana/{id} — one card by id.
pub async fn get_card(Path(id): Path<u8>) -> ApiResult<Json<&'static ArcanaCard>> {
    card(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("card '{id}' not found")))
}
