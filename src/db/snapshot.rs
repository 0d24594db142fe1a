use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::db::models::{Article, Corpus, FeatureRecord, WeightRecord, WeightedDocument};
use crate::db::repository::DocumentStore;
use crate::error::AppError;

/// Locations of the three exported collections.
#[derive(Debug, Clone)]
pub struct SnapshotPaths {
    pub tfidf: PathBuf,
    pub articles: PathBuf,
    pub feature: PathBuf,
}

/// Static-snapshot implementation of the DocumentStore.
///
/// Holds the exported collections in memory; the join happens in
/// [`DocumentStore::load_corpus`], which moves the weight vectors out of the
/// store. Only the articles stay behind for lookups.
#[derive(Debug, Clone, Default)]
pub struct SnapshotDocumentStore {
    weights: Vec<WeightRecord>,
    articles: Vec<Article>,
    features: Vec<FeatureRecord>,
}

impl SnapshotDocumentStore {
    /// Build from already-parsed records.
    pub fn from_records(
        weights: Vec<WeightRecord>,
        articles: Vec<Article>,
        features: Vec<FeatureRecord>,
    ) -> Self {
        Self {
            weights,
            articles,
            features,
        }
    }

    /// Read the three export files.
    pub async fn open(paths: &SnapshotPaths) -> Result<Self, AppError> {
        let weights = read_collection(&paths.tfidf).await?;
        let articles = read_collection(&paths.articles).await?;
        let features = read_collection(&paths.feature).await?;

        Ok(Self::from_records(weights, articles, features))
    }
}

#[async_trait]
impl DocumentStore for SnapshotDocumentStore {
    fn backend_name(&self) -> &'static str {
        "snapshot"
    }

    async fn load_corpus(&mut self) -> Result<Corpus, AppError> {
        let feature = std::mem::take(&mut self.features)
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::InvalidCorpus("feature snapshot contains no records".into())
            })?;
        let weights = std::mem::take(&mut self.weights);
        let total = weights.len();

        let by_id: HashMap<&str, &Article> = self
            .articles
            .iter()
            .map(|article| (article.id.as_str(), article))
            .collect();

        // Weight records without a matching article are dropped, like an
        // inner join.
        let documents: Vec<WeightedDocument> = weights
            .into_iter()
            .filter_map(|record| {
                let article = by_id.get(record.document_id.as_str())?;
                Some(WeightedDocument::merge(
                    record.document_id,
                    record.vector,
                    (*article).clone(),
                ))
            })
            .collect();

        if documents.is_empty() {
            return Err(AppError::InvalidCorpus(
                "weight snapshot yielded no documents joined with articles".into(),
            ));
        }

        let dropped = total - documents.len();
        if dropped > 0 {
            tracing::warn!(dropped, "Weight records without a matching article were skipped");
        }
        tracing::info!(
            documents = documents.len(),
            vocabulary = feature.feature_names.len(),
            "Loaded corpus from snapshot"
        );

        Ok(Corpus {
            vocabulary: feature.feature_names,
            documents,
        })
    }

    async fn find_article(&self, category: &str, slug: &str) -> Result<Option<Article>, AppError> {
        Ok(self
            .articles
            .iter()
            .find(|article| article.matches(category, slug))
            .cloned())
    }
}

/// Read a collection export: either a JSON array or one JSON document per line.
pub async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::Storage(format!("failed to read {}: {e}", path.display())))?;

    parse_collection(&raw)
        .map_err(|e| AppError::InvalidCorpus(format!("failed to parse {}: {e}", path.display())))
}

fn parse_collection<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, serde_json::Error> {
    if raw.trim_start().starts_with('[') {
        return serde_json::from_str(raw);
    }

    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line))
        .collect()
}
