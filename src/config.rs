use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::db::repository::CollectionNames;
use crate::db::snapshot::SnapshotPaths;
use crate::error::AppError;

/// Which document store strategy serves the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Static export files read at startup.
    #[default]
    Snapshot,
    /// Live MongoDB aggregation at startup.
    Mongo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    pub tfidf_path: PathBuf,
    pub articles_path: PathBuf,
    pub feature_path: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            tfidf_path: PathBuf::from("data/tf_idf.json"),
            articles_path: PathBuf::from("data/news_data.json"),
            feature_path: PathBuf::from("data/feature.json"),
        }
    }
}

impl SnapshotConfig {
    pub fn paths(&self) -> SnapshotPaths {
        SnapshotPaths {
            tfidf: self.tfidf_path.clone(),
            articles: self.articles_path.clone(),
            feature: self.feature_path.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub tfidf_collection: String,
    pub articles_collection: String,
    pub feature_collection: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        let names = CollectionNames::default();
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "local".to_string(),
            tfidf_collection: names.tfidf,
            articles_collection: names.articles,
            feature_collection: names.feature,
        }
    }
}

impl MongoConfig {
    pub fn collection_names(&self) -> CollectionNames {
        CollectionNames {
            tfidf: self.tfidf_collection.clone(),
            articles: self.articles_collection.clone(),
            feature: self.feature_collection.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Whitespace-separated root words added to the stemmer dictionary.
    pub dictionary_path: Option<PathBuf>,
}

/// Service configuration.
///
/// Sources, later ones overriding earlier ones:
/// - built-in defaults
/// - `newsearch.{toml,yaml,json}` in the working directory, or the file
///   passed with `--config`
/// - `NEWSEARCH_*` environment variables, `__` separating nested keys
///   (e.g. `NEWSEARCH_MONGO__URI`)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub backend: Backend,
    pub snapshot: SnapshotConfig,
    pub mongo: MongoConfig,
    pub stemmer: StemmerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            backend: Backend::default(),
            snapshot: SnapshotConfig::default(),
            mongo: MongoConfig::default(),
            stemmer: StemmerConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(file: Option<&Path>) -> Result<Self, AppError> {
        let builder = config::Config::builder();
        let builder = match file {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name("newsearch").required(false)),
        };

        builder
            .add_source(
                config::Environment::with_prefix("NEWSEARCH")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

/// Read extra stemmer roots from a whitespace-separated word list.
pub async fn load_root_words(path: &Path) -> Result<Vec<String>, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::Storage(format!("failed to read {}: {e}", path.display())))?;

    Ok(raw
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.backend, Backend::Snapshot);
        assert_eq!(config.mongo.database, "local");
        assert_eq!(config.mongo.tfidf_collection, "tf_idf");
        assert_eq!(config.snapshot.feature_path, PathBuf::from("data/feature.json"));
        assert!(config.stemmer.dictionary_path.is_none());
    }

    #[test]
    fn test_load_from_file_with_partial_sections() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "bind_addr = \"127.0.0.1:8080\"\nbackend = \"mongo\"\n\n[mongo]\ndatabase = \"berita\"\n"
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.backend, Backend::Mongo);
        assert_eq!(config.mongo.database, "berita");
        assert_eq!(config.mongo.uri, "mongodb://localhost:27017");
        assert_eq!(config.mongo.collection_names().articles, "news_data");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = AppConfig::load(Some(Path::new("/no/such/newsearch.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[tokio::test]
    async fn test_load_root_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "makan Minum\n  tidur\n").unwrap();

        let words = load_root_words(file.path()).await.unwrap();
        assert_eq!(words, vec!["makan", "minum", "tidur"]);
    }
}
