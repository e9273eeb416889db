use crate::error::Result;
use crate::feature::tfidf::TfIdfVector;
use crate::metric::Metric;

/// Cosine distance `1 - cos(a, b)` between two TF-IDF vectors.
///
/// TF-IDF weights are non-negative, so the result is in [0, 1].
/// Two all-zero vectors are treated as identical (0.0); an all-zero vector
/// against a non-zero one is maximally distant (1.0).
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfCosineDistance;

impl TfIdfCosineDistance {
    pub fn cosine_similarity(a: &TfIdfVector, b: &TfIdfVector) -> Option<f64> {
        // iterate the shorter side for the dot product
        let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        let mut products: Vec<f64> = short
            .iter()
            .filter_map(|(term, wa)| long.get(term).map(|wb| wa * wb))
            .collect();
        // summation order must not depend on argument order
        products.sort_by(|x, y| x.total_cmp(y));
        let dot: f64 = products.iter().sum();
        let norm_a = a.values().map(|v| v * v).sum::<f64>().sqrt();
        let norm_b = b.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return None;
        }
        Some(dot / (norm_a * norm_b))
    }
}

impl Metric<TfIdfVector> for TfIdfCosineDistance {
    fn distance(&self, a: &TfIdfVector, b: &TfIdfVector) -> Result<f64> {
        let distance = match Self::cosine_similarity(a, b) {
            Some(cos) => (1.0 - cos).clamp(0.0, 1.0),
            None => {
                let a_zero = a.values().all(|&v| v == 0.0);
                let b_zero = b.values().all(|&v| v == 0.0);
                if a_zero && b_zero { 0.0 } else { 1.0 }
            }
        };
        Ok(distance)
    }
}
