use ahash::RandomState;
use indexmap::IndexSet;

use crate::utils::normalizer;

/// Distinct words of a document in first-seen order.
pub type WordSet = IndexSet<String, RandomState>;

/// Punctuation-stripped, case-preserving set of words.
pub fn word_set(text: &str) -> WordSet {
    normalizer::tokenize(text).into_iter().collect()
}
