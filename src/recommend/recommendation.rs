use std::fmt;

use serde::Serialize;

/// One ranked result: the item title and its cosine similarity to the
/// seed item. Display form is `"{title} - {score:.2}"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub score: f64,
}

impl Recommendation {
    #[must_use]
    pub const fn new(title: String, score: f64) -> Self {
        Self { title, score }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {:.2}", self.title, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_score_to_two_decimals() {
        let recommendation = Recommendation::new("Final score".to_string(), 0.4567);

        assert_eq!(recommendation.to_string(), "Final score - 0.46");
    }
}
