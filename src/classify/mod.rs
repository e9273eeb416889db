//! k-nearest-neighbor classification over any [`Metric`](crate::metric::Metric).
pub mod knn;
pub mod vote;

pub use knn::{build_classifier, KnnClassifier, Neighbor};
pub use vote::majority_vote;
