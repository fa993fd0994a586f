use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The taxonomy exists for logging and tests; on the wire every variant
/// collapses into one generic `500` with a `detail` message, matching the
/// upstream contract, which does not distinguish failure stages. Requests the
/// framework cannot deserialize never reach a handler and are rejected with a
/// 4xx by the `Json` extractor instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or empty required request field.
    #[error("{0}")]
    Validation(String),

    /// The external model call could not complete (network, provider error,
    /// timeout, rate limit, empty content).
    #[error("model call failed: {0}")]
    Generation(#[from] LlmError),

    /// The model's response did not parse into the required output shape.
    #[error("invalid model output: {0}")]
    Schema(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(msg) => tracing::error!("Validation error: {msg}"),
            AppError::Generation(e) => tracing::error!("Generation error: {e}"),
            AppError::Schema(msg) => tracing::error!("Schema error: {msg}"),
        }

        let body = Json(json!({
            "detail": format!("Error generating product content: {self}"),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn detail_of(error: AppError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, body["detail"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_validation_error_is_generic_500_with_detail() {
        let (status, detail) =
            detail_of(AppError::Validation("title must not be empty".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            detail,
            "Error generating product content: title must not be empty"
        );
    }

    #[tokio::test]
    async fn test_generation_error_carries_underlying_text() {
        let (status, detail) = detail_of(AppError::Generation(LlmError::EmptyContent)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(detail.starts_with("Error generating product content:"));
        assert!(detail.contains("empty content"));
    }

    #[tokio::test]
    async fn test_schema_error_is_generic_500_with_detail() {
        let (status, detail) =
            detail_of(AppError::Schema("bulletpoints has 7 entries (max 5)".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(detail.contains("bulletpoints has 7 entries"));
    }
}
