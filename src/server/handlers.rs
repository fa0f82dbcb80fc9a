use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::playlist::{MoodRequest, PlaylistResult};
use crate::server::AppState;

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn generate_playlist_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<MoodRequest>, JsonRejection>,
) -> Result<Json<PlaylistResult>> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected request body: {}", rejection.body_text());
        AppError::InvalidInput("Text input is required.".into())
    })?;

    let result = state.generator.generate_playlist(&request).await?;
    Ok(Json(result))
}
