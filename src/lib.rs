pub mod dataset;
pub mod error;
pub mod normalizer;
pub mod recommend;
pub mod similarity;
pub mod stopwords;
pub mod vector_space;

pub use error::{Error, Result};
pub use normalizer::Normalizer;
pub use recommend::{NewsItem, Outcome, Recommendation, Recommender};
pub use similarity::SimilarityMatrix;
pub use vector_space::VectorSpace;
