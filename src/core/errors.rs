use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("embedding provider error: {0}")]
    EmbeddingProvider(String),
    #[error("generation provider error: {0}")]
    GenerationProvider(String),
    #[error("corpus load error: {0}")]
    CorpusLoad(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal<E: std::fmt::Display>(err: E) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::EmbeddingProvider(_) | ApiError::GenerationProvider(_) => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::CorpusLoad(_)
            | ApiError::Configuration(_)
            | ApiError::DimensionMismatch { .. }
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
