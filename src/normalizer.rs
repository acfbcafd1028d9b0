use crate::error::{Error, Result};
use crate::stopwords::StopWords;
use regex::Regex;
use rust_stemmers::Stemmer;

/// Reduces a raw title to a canonical space-joined token sequence.
///
/// The pipeline is fixed and order-sensitive: lowercase, turn structural
/// punctuation into spaces, delete the remaining symbols, stem each token,
/// drop stopwords. Every input produces some output string, possibly empty;
/// normalization itself never fails.
pub struct Normalizer {
    stemmer: Stemmer,
    separators: Regex,
    symbols: Regex,
    stopwords: StopWords,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            stemmer: Stemmer::create(rust_stemmers::Algorithm::English),
            separators: Regex::new(r"[/(){}\[\]|@,;]")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
            // Anything outside this set is deleted without leaving a
            // token boundary behind.
            symbols: Regex::new(r"[^0-9a-z #+_]")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
            stopwords: StopWords::english(),
        })
    }

    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        let text = text.to_lowercase();
        let text = self.separators.replace_all(&text, " ");
        let text = self.symbols.replace_all(&text, "");

        text.split_whitespace()
            .map(|token| self.stemmer.stem(token))
            .filter(|token| !self.stopwords.contains(token.as_ref()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
