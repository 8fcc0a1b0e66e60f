use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type, one variant per pipeline stage.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to a 500 with a `{"detail": "..."}` body whose message
/// prefix identifies the originating stage. Messages are forwarded as-is to
/// the caller; nothing is swallowed, nothing is persisted.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Prompt formatting failed: {0}")]
    PromptFormatting(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Failed to parse JSON: {0}")]
    ResponseParse(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::PromptFormatting(msg) => {
                tracing::error!("Prompt formatting error: {msg}");
                self.to_string()
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                self.to_string()
            }
            AppError::ResponseParse(msg) => {
                tracing::error!("Response parse error: {msg}");
                self.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                self.to_string()
            }
        };

        let body = Json(json!({ "detail": message }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
