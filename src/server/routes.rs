use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, error};

use super::error::ApiError;
use super::state::AppState;
use crate::translation::build_prompt;

/// Body of a translation request.
///
/// Missing fields deserialize to empty strings and are rejected by the
/// same validation branch as explicitly empty ones.
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: String,
}

/// Body of a successful translation response.
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation: String,
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(translate))
        .route("/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    if request.text.is_empty() || request.language.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let prompt = build_prompt(&request.text, &request.language);
    debug!(
        "Translating {} bytes into {}",
        request.text.len(),
        request.language
    );

    match state.runner.run(&prompt).await {
        Ok(translation) => Ok(Json(TranslateResponse { translation })),
        Err(e) => {
            error!("Agent runner failed: {e:#}");
            Err(ApiError::Translation(e.to_string()))
        }
    }
}
