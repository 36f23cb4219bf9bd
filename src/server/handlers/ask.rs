use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::core::errors::ApiError;
use crate::state::AppState;

/// Answer a rulebook question.
///
/// The body is the raw question as a JSON-encoded string. The response
/// carries the generated answer plus the retrieval debug trace.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(question): Json<String>,
) -> Result<impl IntoResponse, ApiError> {
    if question.trim().is_empty() {
        return Err(ApiError::BadRequest("question must not be empty".to_string()));
    }

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, "Answering rulebook question");

    let outcome = state.engine.answer(&question).await.map_err(|err| {
        tracing::warn!(%request_id, "Request failed: {}", err);
        err
    })?;

    tracing::info!(
        %request_id,
        "Answered with {} context passages",
        outcome.debug.relevant_sections.len()
    );

    Ok(Json(outcome))
}
