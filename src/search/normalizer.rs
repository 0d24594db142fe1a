use std::sync::LazyLock;

use regex::Regex;

use super::stemmer::Stemmer;
use super::stopwords::StopWords;

/// Anything that is neither a word character nor whitespace, and every digit.
static NON_WORD_OR_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]|\d").expect("static pattern is valid"));

/// Turns raw query text into normalized tokens.
///
/// Steps: punctuation and digits become spaces, text is lowercased, stop
/// words are dropped, remaining words are stemmed.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stop_words: StopWords,
    stemmer: Stemmer,
}

impl TextNormalizer {
    pub fn new(stop_words: StopWords, stemmer: Stemmer) -> Self {
        Self {
            stop_words,
            stemmer,
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = NON_WORD_OR_DIGIT.replace_all(text, " ").to_lowercase();

        cleaned
            .split_whitespace()
            .filter(|word| !self.stop_words.contains(word))
            .map(|word| self.stemmer.stem(word))
            .collect()
    }
}
