use async_trait::async_trait;

use crate::db::models::{Article, Corpus, FeatureRecord, JoinedRecord, WeightedDocument};
use crate::error::AppError;

/// Source of the search corpus and of single articles.
///
/// Two strategies exist: a static snapshot loaded from export files, and a
/// live MongoDB database. Exactly one is selected at startup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short strategy name, used in logs.
    fn backend_name(&self) -> &'static str;

    /// Load the vocabulary and every weighted document joined with its
    /// article. Called once at startup; weight data held by the store is
    /// handed over to the returned corpus.
    async fn load_corpus(&mut self) -> Result<Corpus, AppError>;

    /// Find the article with the given canonical category and slug.
    async fn find_article(&self, category: &str, slug: &str) -> Result<Option<Article>, AppError>;
}

/// Collection names of the live strategy.
#[derive(Debug, Clone)]
pub struct CollectionNames {
    pub tfidf: String,
    pub articles: String,
    pub feature: String,
}

impl Default for CollectionNames {
    fn default() -> Self {
        Self {
            tfidf: "tf_idf".to_string(),
            articles: "news_data".to_string(),
            feature: "feature".to_string(),
        }
    }
}

/// MongoDB implementation of the DocumentStore.
///
/// The corpus is produced by a `$lookup` aggregation from the weight
/// collection into the article collection.
pub struct MongoDocumentStore {
    db: mongodb::Database,
    names: CollectionNames,
}

impl MongoDocumentStore {
    pub fn new(db: &mongodb::Database, names: CollectionNames) -> Self {
        Self {
            db: db.clone(),
            names,
        }
    }

    /// Connect using a connection string.
    pub async fn connect(
        uri: &str,
        database: &str,
        names: CollectionNames,
    ) -> Result<Self, AppError> {
        let client = mongodb::Client::with_uri_str(uri).await?;
        Ok(Self::new(&client.database(database), names))
    }

    fn join_pipeline(&self) -> Vec<mongodb::bson::Document> {
        use mongodb::bson::doc;

        vec![
            doc! {
                "$lookup": {
                    "from": self.names.articles.as_str(),
                    "localField": "Document_id",
                    "foreignField": "_id",
                    "as": "news_data",
                }
            },
            doc! { "$unwind": "$news_data" },
            doc! { "$project": { "news_data._id": 0, "news_data.Isi Berita": 0 } },
        ]
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    fn backend_name(&self) -> &'static str {
        "mongo"
    }

    async fn load_corpus(&mut self) -> Result<Corpus, AppError> {
        use futures::TryStreamExt;

        let tfidf = self
            .db
            .collection::<mongodb::bson::Document>(&self.names.tfidf);
        let joined: Vec<mongodb::bson::Document> = tfidf
            .aggregate(self.join_pipeline())
            .await?
            .try_collect()
            .await?;

        let mut documents = Vec::with_capacity(joined.len());
        for raw in joined {
            let record: JoinedRecord = mongodb::bson::from_document(raw)
                .map_err(|e| AppError::InvalidCorpus(format!("malformed joined record: {e}")))?;
            documents.push(WeightedDocument::from(record));
        }

        let features = self.db.collection::<FeatureRecord>(&self.names.feature);
        let feature = features.find_one(mongodb::bson::doc! {}).await?;

        if documents.is_empty() {
            return Err(AppError::InvalidCorpus(format!(
                "collection '{}' yielded no documents joined with '{}'",
                self.names.tfidf, self.names.articles
            )));
        }
        let feature = feature.ok_or_else(|| {
            AppError::InvalidCorpus(format!("collection '{}' is empty", self.names.feature))
        })?;

        tracing::info!(
            documents = documents.len(),
            vocabulary = feature.feature_names.len(),
            "Loaded corpus from MongoDB"
        );

        Ok(Corpus {
            vocabulary: feature.feature_names,
            documents,
        })
    }

    async fn find_article(&self, category: &str, slug: &str) -> Result<Option<Article>, AppError> {
        use mongodb::bson::doc;

        let articles = self.db.collection::<Article>(&self.names.articles);
        let article = articles
            .find_one(doc! { "Slug": slug, "Kategori": category })
            .await?;

        Ok(article)
    }
}
