use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};

const MIN_NGRAM: usize = 1;
const MAX_NGRAM: usize = 3;

/// Sparse TF-IDF weights for one item, ordered by term index, with the
/// L2 norm precomputed. A title that normalizes to the empty string gets
/// an empty weight list and a zero norm.
#[derive(Debug, Clone)]
pub struct TermVector {
    weights: Vec<(usize, f64)>,
    norm: f64,
}

impl TermVector {
    fn new(weights: Vec<(usize, f64)>) -> Self {
        let norm = weights
            .iter()
            .map(|(_, weight)| weight * weight)
            .sum::<f64>()
            .sqrt();

        Self { weights, norm }
    }

    #[must_use]
    pub fn norm(&self) -> f64 {
        self.norm
    }

    #[must_use]
    pub fn weights(&self) -> &[(usize, f64)] {
        &self.weights
    }

    /// Dot product as a merge walk over the two sorted index lists.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let mut sum = 0.0;
        let mut left = self.weights.iter().peekable();
        let mut right = other.weights.iter().peekable();

        while let (Some(&&(i, a)), Some(&&(j, b))) = (left.peek(), right.peek()) {
            match i.cmp(&j) {
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
                std::cmp::Ordering::Equal => {
                    sum += a * b;
                    left.next();
                    right.next();
                }
            }
        }

        sum
    }
}

/// Shared 1..3-gram vocabulary plus one TF-IDF vector per item.
///
/// The vocabulary keeps every n-gram that occurs anywhere in the corpus,
/// indexed in lexicographic order so rebuilds over the same corpus assign
/// the same indices. Weights use smoothed IDF:
/// `tf * (ln((1 + N) / (1 + df)) + 1)`.
pub struct VectorSpace {
    vocabulary: HashMap<String, usize>,
    vectors: Vec<TermVector>,
}

impl VectorSpace {
    pub fn build<S: AsRef<str>>(documents: &[S]) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let counts: Vec<HashMap<String, u64>> = documents
            .iter()
            .map(|document| term_counts(document.as_ref()))
            .collect();

        let mut document_frequency: BTreeMap<&str, u64> = BTreeMap::new();
        for document_counts in &counts {
            for term in document_counts.keys() {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let total_documents = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());

        for (index, (term, frequency)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + total_documents) / (1.0 + frequency as f64)).ln() + 1.0);
            vocabulary.insert(term.to_string(), index);
        }

        let vectors = counts
            .iter()
            .map(|document_counts| {
                let mut weights: Vec<(usize, f64)> = document_counts
                    .iter()
                    .map(|(term, count)| {
                        let index = vocabulary[term.as_str()];
                        (index, *count as f64 * idf[index])
                    })
                    .collect();

                weights.sort_unstable_by_key(|&(index, _)| index);
                TermVector::new(weights)
            })
            .collect();

        Ok(Self { vocabulary, vectors })
    }

    #[must_use]
    pub fn vectors(&self) -> &[TermVector] {
        &self.vectors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[must_use]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

fn term_counts(document: &str) -> HashMap<String, u64> {
    let tokens: Vec<&str> = document.split_whitespace().collect();
    let mut counts = HashMap::new();

    for n in MIN_NGRAM..=MAX_NGRAM {
        for ngram in tokens.windows(n) {
            *counts.entry(ngram.join(" ")).or_insert(0) += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_corpus_is_rejected() {
        let documents: Vec<String> = Vec::new();

        assert!(matches!(
            VectorSpace::build(&documents),
            Err(Error::EmptyCorpus)
        ));
    }

    #[test]
    fn vocabulary_spans_unigrams_through_trigrams() {
        let space = VectorSpace::build(&["alpha beta gamma"]).expect("Failed to build space");

        assert!(space.term_index("alpha").is_some());
        assert!(space.term_index("alpha beta").is_some());
        assert!(space.term_index("alpha beta gamma").is_some());
        assert!(space.term_index("beta gamma").is_some());
        // 3 unigrams + 2 bigrams + 1 trigram
        assert_eq!(space.vocabulary_size(), 6);
    }

    #[test]
    fn rare_terms_are_kept() {
        // No document-frequency pruning: a term occurring once survives.
        let space =
            VectorSpace::build(&["alpha beta", "alpha beta", "zeta"]).expect("Failed to build space");

        assert!(space.term_index("zeta").is_some());
    }

    #[test]
    fn absent_terms_have_zero_weight() {
        let space = VectorSpace::build(&["alpha", "beta"]).expect("Failed to build space");
        let alpha = space.term_index("alpha").expect("Failed to find term");

        let second = &space.vectors()[1];
        assert!(second.weights().iter().all(|&(index, _)| index != alpha));
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let space =
            VectorSpace::build(&["alpha beta", "alpha", "alpha"]).expect("Failed to build space");
        let alpha = space.term_index("alpha").expect("Failed to find term");
        let beta = space.term_index("beta").expect("Failed to find term");

        let first = &space.vectors()[0];
        let weight_of = |wanted: usize| {
            first
                .weights()
                .iter()
                .find(|&&(index, _)| index == wanted)
                .map(|&(_, weight)| weight)
                .expect("Failed to find weight")
        };

        assert!(weight_of(beta) > weight_of(alpha));
    }

    #[test]
    fn empty_document_yields_zero_vector() {
        let space = VectorSpace::build(&["alpha", ""]).expect("Failed to build space");

        assert!(space.vectors()[1].weights().is_empty());
        assert_eq!(space.vectors()[1].norm(), 0.0);
    }

    #[test]
    fn weights_are_non_negative() {
        let space = VectorSpace::build(&["alpha beta alpha", "beta gamma", "alpha"])
            .expect("Failed to build space");

        for vector in space.vectors() {
            assert!(vector.weights().iter().all(|&(_, weight)| weight > 0.0));
        }
    }
}
