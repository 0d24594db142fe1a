use axum::extract::{Path, State};
use axum::Json;

use crate::app::AppState;
use crate::db::models::Article;
use crate::db::repository::DocumentStore;
use crate::error::AppError;
use crate::search::category::canonical_category;

const NOT_FOUND_MESSAGE: &str = "No news data found for the given slug";

/// Split `category/.../slug` into its first and last segments.
pub fn split_news_path(path: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = path.trim_matches('/').split('/').collect();
    match parts.as_slice() {
        [category, .., slug] => Some((*category, *slug)),
        _ => None,
    }
}

/// Look up a single article by the path under `/news/`.
pub async fn process_news_lookup(
    store: &dyn DocumentStore,
    path: &str,
) -> Result<Article, AppError> {
    let (category, slug) =
        split_news_path(path).ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.into()))?;
    let category = canonical_category(category);

    store
        .find_article(&category, slug)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.into()))
}

/// Axum handler for `GET /news/{category}/{slug}`.
pub async fn news_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<Article>, AppError> {
    let article = process_news_lookup(state.store.as_ref(), &path).await?;
    Ok(Json(article))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Corpus, WeightedDocument};
    use crate::db::repository::MockDocumentStore;
    use crate::search::index::SearchIndex;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    fn state_with(store: MockDocumentStore) -> AppState {
        let article: Article = serde_json::from_value(serde_json::json!({"_id": "a1"})).unwrap();
        let index = SearchIndex::build(
            Corpus {
                vocabulary: vec!["ekonomi".into()],
                documents: vec![WeightedDocument {
                    article,
                    vector: vec![1.0],
                }],
            },
            Vec::<String>::new(),
        )
        .unwrap();

        AppState {
            index: Arc::new(index),
            store: Arc::new(store),
        }
    }

    #[test]
    fn test_split_news_path() {
        assert_eq!(split_news_path("olahraga/gol-cepat"), Some(("olahraga", "gol-cepat")));
        assert_eq!(split_news_path("/olahraga/gol-cepat/"), Some(("olahraga", "gol-cepat")));
        assert_eq!(split_news_path("olahraga/2024/gol-cepat"), Some(("olahraga", "gol-cepat")));
        assert_eq!(split_news_path("gol-cepat"), None);
    }

    #[tokio::test]
    async fn test_missing_article_is_not_found() {
        let mut store = MockDocumentStore::new();
        store.expect_find_article().times(1).returning(|_, _| Ok(None));

        let response = news_handler(
            State(state_with(store)),
            Path("olahraga/some-slug".to_string()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_single_segment_never_reaches_store() {
        let mut store = MockDocumentStore::new();
        store.expect_find_article().never();

        let response = news_handler(State(state_with(store)), Path("some-slug".to_string()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_article()
            .returning(|_, _| Err(AppError::Database("connection reset".into())));

        let response = news_handler(State(state_with(store)), Path("ekonomi/x".to_string()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_found_article_is_returned() {
        let mut store = MockDocumentStore::new();
        store.expect_find_article().returning(|_, _| {
            Ok(Some(
                serde_json::from_value(serde_json::json!({
                    "_id": "a9",
                    "Kategori": "Ekonomi",
                    "Slug": "harga-naik",
                }))
                .unwrap(),
            ))
        });

        let Json(article) = news_handler(
            State(state_with(store)),
            Path("EKONOMI/harga-naik".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(article.id, "a9");
        assert_eq!(article.slug.as_deref(), Some("harga-naik"));
    }
}
