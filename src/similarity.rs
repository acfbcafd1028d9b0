use crate::vector_space::VectorSpace;

/// Dense N×N cosine similarity over the corpus TF-IDF vectors.
///
/// Symmetric by construction: only the upper triangle is computed and then
/// mirrored. Scores lie in [0, 1] since the weights are non-negative. The
/// diagonal is pinned to exactly 1.0, except for zero vectors, whose
/// similarity to everything (themselves included) is defined as 0.0.
pub struct SimilarityMatrix {
    len: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    #[must_use]
    pub fn compute(space: &VectorSpace) -> Self {
        let vectors = space.vectors();
        let len = vectors.len();
        let mut scores = vec![0.0; len * len];

        for i in 0..len {
            if vectors[i].norm() > 0.0 {
                scores[i * len + i] = 1.0;
            }

            for j in (i + 1)..len {
                let denominator = vectors[i].norm() * vectors[j].norm();
                let score = if denominator == 0.0 {
                    0.0
                } else {
                    (vectors[i].dot(&vectors[j]) / denominator).clamp(0.0, 1.0)
                };

                scores[i * len + j] = score;
                scores[j * len + i] = score;
            }
        }

        Self { len, scores }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.scores[i * self.len + j]
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.scores[i * self.len..(i + 1) * self.len]
    }
}
