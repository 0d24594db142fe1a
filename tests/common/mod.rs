#![allow(dead_code)]


use axum::Router;
use serde_json::json;

use newsearch::app::{self, AppState};
use newsearch::db::models::{Article, FeatureRecord, WeightRecord};
use newsearch::db::snapshot::SnapshotDocumentStore;

/// Vocabulary of the default fixture, in axis order.
pub const VOCABULARY: [&str; 4] = ["ekonomi", "bola", "politik", "harga"];

/// An in-memory snapshot wired into the real router.
pub struct TestEnv {
    pub state: AppState,
    pub router: Router,
}

impl TestEnv {
    /// Default fixture: four articles over three categories.
    pub async fn start() -> Self {
        Self::with_records(
            vec![
                weight("a1", vec![0.8, 0.0, 0.0, 0.6]),
                weight("a2", vec![0.0, 0.9, 0.0, 0.0]),
                weight("a3", vec![0.1, 0.0, 0.9, 0.0]),
                weight("a4", vec![0.3, 0.0, 0.0, 0.0]),
            ],
            vec![
                article("a1", "Ekonomi", "harga-beras-naik", "Harga Beras Naik"),
                article("a2", "Olahraga", "timnas-menang", "Timnas Menang"),
                article("a3", "Politik", "debat-capres", "Debat Capres"),
                serde_json::from_value(json!({ "_id": "a4", "Kategori": "Ekonomi" })).unwrap(),
            ],
            feature(&VOCABULARY),
        )
        .await
    }

    /// Build an environment from explicit snapshot records.
    pub async fn with_records(
        weights: Vec<WeightRecord>,
        articles: Vec<Article>,
        feature: FeatureRecord,
    ) -> Self {
        let store = SnapshotDocumentStore::from_records(weights, articles, vec![feature]);
        let state = AppState::initialize(Box::new(store), Vec::new())
            .await
            .expect("Failed to initialize test state");
        let router = app::router(state.clone());

        Self { state, router }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
    }
}

/// A weight record whose `Document_id` is `document_id`.
pub fn weight(document_id: &str, vector: Vec<f64>) -> WeightRecord {
    serde_json::from_value(json!({
        "_id": format!("w-{document_id}"),
        "Document_id": document_id,
        "tfidf_vector": vector,
    }))
    .unwrap()
}

/// A complete article record, body included.
pub fn article(id: &str, category: &str, slug: &str, title: &str) -> Article {
    serde_json::from_value(json!({
        "_id": id,
        "Judul": title,
        "Tanggal": "2024-03-01",
        "Pengarang": "Redaksi",
        "Kategori": category,
        "Url": format!("https://berita.example/{}/{slug}", category.to_lowercase()),
        "Slug": slug,
        "Ringkasan": format!("Ringkasan {title}"),
        "Isi Berita": format!("Isi lengkap {title}"),
    }))
    .unwrap()
}

pub fn feature(terms: &[&str]) -> FeatureRecord {
    serde_json::from_value(json!({ "_id": "f1", "feature_names": terms })).unwrap()
}
