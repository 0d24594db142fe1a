use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub vocabulary_size: usize,
    pub documents_count: usize,
}

/// Axum handler for `GET /`.
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "API is running".to_string(),
        vocabulary_size: state.index.vocabulary_size(),
        documents_count: state.index.documents_count(),
    })
}
