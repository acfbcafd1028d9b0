use std::collections::HashSet;

use crate::{
    error::Result, normalizer::Normalizer, similarity::SimilarityMatrix,
    vector_space::VectorSpace,
};

use super::recommendation::Recommendation;

/// One corpus entry. The position in the corpus is its identity: vectors
/// and matrix rows are indexed by it, and duplicate titles stay distinct
/// entries until result deduplication.
#[derive(Debug, Clone)]
pub struct NewsItem {
    pub title: String,
    pub normalized: String,
}

/// Query result: either a ranked list or the keyword that matched nothing.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Ranked(Vec<Recommendation>),
    NoMatch(String),
}

/// Immutable query engine over a precomputed similarity matrix.
///
/// `build` runs the whole batch pipeline once (normalize every title,
/// build the vector space, compute the matrix); `recommend` is then a
/// pure read-only lookup, safe to share across threads. Any change to
/// the corpus requires a fresh `build`.
pub struct Recommender {
    items: Vec<NewsItem>,
    matrix: SimilarityMatrix,
}

impl Recommender {
    pub fn build(titles: Vec<String>) -> Result<Self> {
        let normalizer = Normalizer::new()?;

        let items: Vec<NewsItem> = titles
            .into_iter()
            .map(|title| {
                let normalized = normalizer.normalize(&title);
                NewsItem { title, normalized }
            })
            .collect();

        let documents: Vec<&str> = items.iter().map(|item| item.normalized.as_str()).collect();
        let space = VectorSpace::build(&documents)?;
        let matrix = SimilarityMatrix::compute(&space);

        Ok(Self { items, matrix })
    }

    #[must_use]
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    /// Ranks every other item by similarity to the seed resolved from the
    /// keyword.
    ///
    /// The seed is the first title in corpus order containing the keyword
    /// as a case-insensitive substring; no attempt is made to pick the
    /// closest textual match among several candidates. Ties in score keep
    /// corpus order. Entries formatting to an identical `(title, score)`
    /// pair are emitted once.
    #[must_use]
    pub fn recommend(&self, keyword: &str) -> Outcome {
        let needle = keyword.to_lowercase();
        let Some(seed) = self
            .items
            .iter()
            .position(|item| item.title.to_lowercase().contains(&needle))
        else {
            return Outcome::NoMatch(keyword.to_string());
        };

        let mut ranked: Vec<(usize, f64)> =
            self.matrix.row(seed).iter().copied().enumerate().collect();
        // Stable sort: equal scores stay in corpus order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut seen = HashSet::new();
        let mut recommendations = Vec::with_capacity(ranked.len().saturating_sub(1));

        for (index, score) in ranked {
            if index == seed {
                continue;
            }

            let item = &self.items[index];
            if seen.insert(format!("{} - {score:.2}", item.title)) {
                recommendations.push(Recommendation::new(item.title.clone(), score));
            }
        }

        Outcome::Ranked(recommendations)
    }
}
