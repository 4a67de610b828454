use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the translation endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed local validation; no external call was made.
    #[error("Text and language are required.")]
    MissingFields,

    /// The agent runner failed; the original message is carried verbatim.
    #[error("Translation failed: {0}")]
    Translation(String),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::Translation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
