use std::collections::HashMap;

use crate::error::AppError;

/// Ordered, duplicate-free list of terms defining every vector's axes.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary, rejecting empty or duplicated term lists.
    pub fn new(terms: Vec<String>) -> Result<Self, AppError> {
        if terms.is_empty() {
            return Err(AppError::InvalidCorpus("vocabulary contains no terms".into()));
        }

        let mut positions = HashMap::with_capacity(terms.len());
        for (idx, term) in terms.iter().enumerate() {
            if positions.insert(term.clone(), idx).is_some() {
                return Err(AppError::InvalidCorpus(format!(
                    "duplicate vocabulary term '{term}'"
                )));
            }
        }

        Ok(Self { terms, positions })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn position(&self, term: &str) -> Option<usize> {
        self.positions.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// TF-IDF vectorizer bound to a fixed vocabulary.
///
/// Fitted once against a synthetic document containing every term exactly
/// once, so document frequencies carry no corpus statistics. Output vectors
/// are L2-normalized.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: Vocabulary,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn fit(vocabulary: Vocabulary) -> Self {
        let n_documents = 1.0_f64;
        let document_frequency = 1.0_f64;
        // Smoothed idf, as if an extra document contained every term once.
        let weight = ((1.0 + n_documents) / (1.0 + document_frequency)).ln() + 1.0;
        let idf = vec![weight; vocabulary.len()];

        Self { vocabulary, idf }
    }

    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    /// Map tokens onto the vocabulary axes.
    ///
    /// Tokens shorter than two characters and out-of-vocabulary tokens are
    /// ignored. No matching token yields the zero vector.
    pub fn transform(&self, tokens: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0; self.dimension()];

        for token in tokens {
            if token.chars().count() < 2 {
                continue;
            }
            if let Some(idx) = self.vocabulary.position(token) {
                vector[idx] += 1.0;
            }
        }

        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in vector.iter_mut() {
                *value /= norm;
            }
        }

        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary(terms: &[&str]) -> Vocabulary {
        Vocabulary::new(terms.iter().map(|t| t.to_string()).collect()).unwrap()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_vocabulary_is_rejected() {
        let err = Vocabulary::new(vec![]).unwrap_err();
        assert!(matches!(err, AppError::InvalidCorpus(_)));
    }

    #[test]
    fn test_duplicate_terms_are_rejected() {
        let err = Vocabulary::new(tokens(&["ekonomi", "bola", "ekonomi"])).unwrap_err();
        assert!(err.to_string().contains("ekonomi"));
    }

    #[test]
    fn test_positions_follow_insertion_order() {
        let vocab = vocabulary(&["zebra", "apel", "mangga"]);
        assert_eq!(vocab.position("zebra"), Some(0));
        assert_eq!(vocab.position("mangga"), Some(2));
        assert_eq!(vocab.position("jeruk"), None);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_idf_is_uniform() {
        let vectorizer = TfidfVectorizer::fit(vocabulary(&["a1", "b2", "c3"]));
        assert!(vectorizer.idf.iter().all(|w| (*w - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_single_term_is_unit_vector() {
        let vectorizer = TfidfVectorizer::fit(vocabulary(&["bola", "ekonomi", "politik"]));
        assert_eq!(vectorizer.transform(&tokens(&["ekonomi"])), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_counts_are_l2_normalized() {
        let vectorizer = TfidfVectorizer::fit(vocabulary(&["bola", "ekonomi"]));
        let v = vectorizer.transform(&tokens(&["bola", "bola", "ekonomi", "ekonomi"]));
        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((v[0] - expected).abs() < 1e-12);
        assert!((v[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_and_single_char_tokens_are_ignored() {
        let vectorizer = TfidfVectorizer::fit(vocabulary(&["x", "bola"]));
        let v = vectorizer.transform(&tokens(&["x", "tidakada", "bola"]));
        assert_eq!(v, vec![0.0, 1.0]);
    }

    #[test]
    fn test_empty_tokens_yield_zero_vector() {
        let vectorizer = TfidfVectorizer::fit(vocabulary(&["bola", "ekonomi"]));
        assert_eq!(vectorizer.transform(&[]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let vectorizer = TfidfVectorizer::fit(vocabulary(&["bola", "ekonomi", "politik"]));
        let query = tokens(&["politik", "ekonomi", "politik"]);
        assert_eq!(vectorizer.transform(&query), vectorizer.transform(&query));
    }
}
