use ahash::RandomState;
use indexmap::IndexSet;

use crate::error::{ReviewKnnError, Result};
use crate::utils::normalizer;

/// One window of consecutive words.
pub type Shingle = Vec<String>;

/// Distinct shingles of a document in first-seen order.
pub type ShingleSet = IndexSet<Shingle, RandomState>;

/// Every contiguous window of `length` words, left to right.
///
/// Words are whitespace-delimited with punctuation kept. Windows repeat if
/// the text repeats. A text shorter than `length` yields no shingles.
///
/// # Errors
/// `InvalidInput` when `length` is 0.
///
/// # Examples
/// ```
/// use review_knn::feature::shingle::shingles;
///
/// let s = shingles("the quick brown fox", 2).unwrap();
/// assert_eq!(s, vec![vec!["the", "quick"], vec!["quick", "brown"], vec!["brown", "fox"]]);
/// ```
pub fn shingles(text: &str, length: usize) -> Result<Vec<Shingle>> {
    if length == 0 {
        return Err(ReviewKnnError::invalid_input("shingle length must be positive"));
    }
    let words = normalizer::words(text);
    Ok(words
        .windows(length)
        .map(|window| window.iter().map(|w| (*w).to_string()).collect())
        .collect())
}

/// The shingles of `text` with duplicate windows collapsed.
pub fn shingle_set(text: &str, length: usize) -> Result<ShingleSet> {
    Ok(shingles(text, length)?.into_iter().collect())
}
