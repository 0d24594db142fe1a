use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::db::repository::DocumentStore;
use crate::error::AppError;
use crate::search::index::SearchIndex;

/// Shared application state, built once at startup.
///
/// Both members are read-only for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<SearchIndex>,
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Load the corpus from `store` and build the search index.
    ///
    /// The index takes ownership of the weight vectors; the store is kept
    /// for article lookups. Any failure here is fatal: the service never
    /// starts with a partial or empty corpus.
    pub async fn initialize(
        mut store: Box<dyn DocumentStore>,
        extra_roots: Vec<String>,
    ) -> Result<Self, AppError> {
        let corpus = store.load_corpus().await?;
        let index = SearchIndex::build(corpus, extra_roots)?;

        tracing::info!(
            backend = store.backend_name(),
            documents = index.documents_count(),
            vocabulary = index.vocabulary_size(),
            "Search index ready"
        );

        Ok(Self {
            index: Arc::new(index),
            store: Arc::from(store),
        })
    }
}

/// Build the HTTP router with all routes and layers.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(api::status::status_handler))
        .route("/search", post(api::search::search_handler))
        .route("/news/{*path}", get(api::news::news_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
