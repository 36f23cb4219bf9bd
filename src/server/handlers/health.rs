use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::state::AppState;

pub async fn health(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let provider_reachable = state.provider.health_check().await.unwrap_or(false);

    Json(json!({
        "chunks": state.corpus.chunks().len(),
        "sections": state.corpus.sections().len(),
        "provider": state.provider.name(),
        "providerReachable": provider_reachable,
    }))
}
