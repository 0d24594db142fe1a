use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::db::models::SearchHit;
use crate::error::AppError;
use crate::search::category::CategoryFilter;
use crate::search::index::SearchIndex;

/// Body of `POST /search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Category label, case-insensitive. Missing or `"All"` searches everything.
    #[serde(default)]
    pub category: Option<String>,
}

/// Core search logic, separated from the HTTP layer for testability.
pub fn process_search(
    index: &SearchIndex,
    request: &SearchRequest,
) -> Result<Vec<SearchHit>, AppError> {
    let filter = CategoryFilter::from_request(request.category.as_deref());
    tracing::info!(query = %request.query, category = filter.label(), "Processing search query");

    let hits = index.search(&request.query, &filter)?;

    tracing::info!(results = hits.len(), category = filter.label(), "Search finished");
    Ok(hits)
}

/// Axum handler for `POST /search`.
///
/// A body that does not decode into a [`SearchRequest`] is reported as a
/// missing query.
pub async fn search_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<SearchHit>>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected search body");
        AppError::BadRequest("No query provided".into())
    })?;

    let hits = process_search(&state.index, &request)?;
    Ok(Json(hits))
}
