use crate::db::models::{Corpus, SearchHit, WeightedDocument};
use crate::error::AppError;

use super::category::CategoryFilter;
use super::normalizer::TextNormalizer;
use super::ranker::{rank, MAX_RESULTS};
use super::stemmer::Stemmer;
use super::stopwords::StopWords;
use super::vectorizer::{TfidfVectorizer, Vocabulary};

/// Immutable query-time state: vocabulary, text pipeline and the merged
/// candidate documents. Built once at startup and shared read-only.
#[derive(Debug)]
pub struct SearchIndex {
    normalizer: TextNormalizer,
    vectorizer: TfidfVectorizer,
    documents: Vec<WeightedDocument>,
}

impl SearchIndex {
    /// Validate a corpus and build the index from it.
    ///
    /// The stemmer dictionary is the vocabulary plus `extra_roots`.
    pub fn build<I, S>(corpus: Corpus, extra_roots: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if corpus.documents.is_empty() {
            return Err(AppError::InvalidCorpus("no weighted documents were loaded".into()));
        }

        let vocabulary = Vocabulary::new(corpus.vocabulary)?;
        for document in &corpus.documents {
            validate_vector(document, vocabulary.len())?;
        }

        let mut stemmer = Stemmer::new(vocabulary.terms().iter().cloned());
        stemmer.extend(extra_roots);
        tracing::debug!(roots = stemmer.dictionary_size(), "Stemmer dictionary ready");
        let normalizer = TextNormalizer::new(StopWords::indonesian(), stemmer);

        Ok(Self {
            normalizer,
            vectorizer: TfidfVectorizer::fit(vocabulary),
            documents: corpus.documents,
        })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.dimension()
    }

    pub fn documents_count(&self) -> usize {
        self.documents.len()
    }

    pub fn query_vector(&self, query: &str) -> Vec<f64> {
        let tokens = self.normalizer.tokenize(query);
        self.vectorizer.transform(&tokens)
    }

    /// Run a query, returning at most [`MAX_RESULTS`] hits by descending score.
    ///
    /// Fails with `NotFound` when the category filter leaves no candidates.
    pub fn search(&self, query: &str, filter: &CategoryFilter) -> Result<Vec<SearchHit>, AppError> {
        let candidates: Vec<&WeightedDocument> = self
            .documents
            .iter()
            .filter(|doc| filter.accepts(doc.article.category.as_deref()))
            .collect();

        if candidates.is_empty() {
            return Err(AppError::NotFound(format!(
                "No documents found for category: {}",
                filter.label()
            )));
        }

        let query_vector = self.query_vector(query);
        let hits = rank(&query_vector, candidates, MAX_RESULTS)
            .into_iter()
            .map(|hit| SearchHit::from_article(&hit.document.article, hit.score))
            .collect();

        Ok(hits)
    }
}

fn validate_vector(document: &WeightedDocument, dimension: usize) -> Result<(), AppError> {
    if document.vector.len() != dimension {
        return Err(AppError::InvalidCorpus(format!(
            "document {} has {} weights, vocabulary has {} terms",
            document.article.id,
            document.vector.len(),
            dimension
        )));
    }

    if let Some(bad) = document
        .vector
        .iter()
        .find(|w| !w.is_finite() || **w < 0.0)
    {
        return Err(AppError::InvalidCorpus(format!(
            "document {} has invalid weight {}",
            document.article.id, bad
        )));
    }

    Ok(())
}
