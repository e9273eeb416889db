use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;

use crate::document::Document;
use crate::error::{ReviewKnnError, Result};
use crate::feature::shingle::shingle_set;
use crate::metric::Metric;

/// Jaccard distance `1 - |a ∩ b| / |a ∪ b|`, computed by exact counting.
///
/// Two empty sets are identical empty documents: the distance is `0.0`.
///
/// # Examples
/// ```
/// use review_knn::feature::word_set::word_set;
/// use review_knn::metric::jaccard_distance;
///
/// let d = jaccard_distance(&word_set("a b c"), &word_set("b c d"));
/// assert_eq!(d, 0.5);
/// ```
pub fn jaccard_distance<T, S1, S2>(a: &IndexSet<T, S1>, b: &IndexSet<T, S2>) -> f64
where
    T: Hash + Eq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    let intersection = b.iter().filter(|item| a.contains(*item)).count();
    let union = a.len() + (b.len() - intersection);
    if union == 0 {
        return 0.0;
    }
    1.0 - intersection as f64 / union as f64
}

/// Jaccard distance over precomputed sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardDistance;

impl<T, S> Metric<IndexSet<T, S>> for JaccardDistance
where
    T: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn distance(&self, a: &IndexSet<T, S>, b: &IndexSet<T, S>) -> Result<f64> {
        Ok(jaccard_distance(a, b))
    }
}

/// Jaccard distance between the word sets of two documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordSetJaccard;

impl Metric<Document> for WordSetJaccard {
    fn distance(&self, a: &Document, b: &Document) -> Result<f64> {
        Ok(jaccard_distance(&a.word_set(), &b.word_set()))
    }
}

/// Jaccard distance between the shingle sets of two documents.
/// Catches shared phrasing rather than shared vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct ShingleJaccard {
    length: usize,
}

impl ShingleJaccard {
    /// # Errors
    /// `InvalidInput` when `length` is 0.
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(ReviewKnnError::invalid_input("shingle length must be positive"));
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Metric<Document> for ShingleJaccard {
    fn distance(&self, a: &Document, b: &Document) -> Result<f64> {
        Ok(jaccard_distance(
            &shingle_set(a.text(), self.length)?,
            &shingle_set(b.text(), self.length)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::word_set::{word_set, WordSet};

    fn set(items: &[&str]) -> WordSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn literal_example() {
        assert_eq!(jaccard_distance(&set(&["a", "b", "c"]), &set(&["b", "c", "d"])), 0.5);
    }

    #[test]
    fn identity_symmetry_and_range() {
        let samples = [
            set(&[]),
            set(&["a"]),
            set(&["a", "b"]),
            set(&["b", "c", "d", "e"]),
            set(&["x", "y"]),
        ];
        for a in &samples {
            assert_eq!(jaccard_distance(a, a), 0.0);
            for b in &samples {
                let ab = jaccard_distance(a, b);
                assert_eq!(ab, jaccard_distance(b, a));
                assert!((0.0..=1.0).contains(&ab));
            }
        }
    }

    #[test]
    fn disjoint_and_empty_cases() {
        assert_eq!(jaccard_distance(&set(&["a"]), &set(&["b"])), 1.0);
        assert_eq!(jaccard_distance(&set(&[]), &set(&[])), 0.0);
        assert_eq!(jaccard_distance(&set(&[]), &set(&["b"])), 1.0);
    }

    #[test]
    fn word_set_metric_strips_punctuation_and_keeps_case() {
        let a = Document::new("Great food!");
        let b = Document::new("great food");
        // {Great, food} vs {great, food}: 1 shared of 3
        let d = WordSetJaccard.distance(&a, &b).unwrap();
        assert!((d - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(WordSetJaccard.distance(&a, &Document::new("Great, food")).unwrap(), 0.0);
    }

    #[test]
    fn set_metric_matches_free_function() {
        let a = word_set("one two three");
        let b = word_set("two three four five");
        assert_eq!(JaccardDistance.distance(&a, &b).unwrap(), jaccard_distance(&a, &b));
    }

    #[test]
    fn shingle_metric_compares_phrases() {
        let metric = ShingleJaccard::new(2).unwrap();
        let a = Document::new("the food was great");
        let b = Document::new("great was food the");
        // same words, no shared bigram
        assert_eq!(metric.distance(&a, &b).unwrap(), 1.0);
        // one shared bigram ("the food") out of five
        let c = Document::new("great was the food");
        assert!((metric.distance(&a, &c).unwrap() - 0.8).abs() < 1e-12);
        assert_eq!(metric.distance(&a, &a).unwrap(), 0.0);
        assert!(ShingleJaccard::new(0).is_err());
    }
}
