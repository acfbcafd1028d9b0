pub mod engine;
pub mod recommendation;

pub use engine::{NewsItem, Outcome, Recommender};
pub use recommendation::Recommendation;
