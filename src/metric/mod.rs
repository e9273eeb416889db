//! Distance metrics pluggable into the k-NN classifier.
pub mod cosine;
pub mod jaccard;

use crate::error::Result;

pub use cosine::TfIdfCosineDistance;
pub use jaccard::{jaccard_distance, JaccardDistance, ShingleJaccard, WordSetJaccard};

/// Distance between two items.
///
/// Implementations must be symmetric and return a non-negative, non-NaN value.
/// Failures (a malformed document, say) are returned, not swallowed; the
/// classifier hands them back to its caller unchanged.
///
/// Any `Fn(&D, &D) -> Result<f64>` is a metric:
/// ```
/// use review_knn::error::Result;
/// use review_knn::metric::Metric;
///
/// let length_gap = |a: &String, b: &String| -> Result<f64> {
///     Ok((a.len() as f64 - b.len() as f64).abs())
/// };
/// assert_eq!(length_gap.distance(&"abc".to_string(), &"a".to_string()).unwrap(), 2.0);
/// ```
pub trait Metric<D: ?Sized> {
    fn distance(&self, a: &D, b: &D) -> Result<f64>;
}

impl<D, F> Metric<D> for F
where
    D: ?Sized,
    F: Fn(&D, &D) -> Result<f64>,
{
    #[inline]
    fn distance(&self, a: &D, b: &D) -> Result<f64> {
        self(a, b)
    }
}
