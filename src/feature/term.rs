use ahash::RandomState;
use indexmap::IndexMap;

use crate::feature::tfidf::{DefaultTfIdfEngine, TfIdfEngine};
use crate::utils::normalizer;

/// Word -> weight, in the order words first appeared in the document.
pub type TermWeights = IndexMap<String, f64, RandomState>;

/// TermFrequency struct
/// Counts how often each lowercased word occurs in one document.
///
/// # Examples
/// ```
/// use review_knn::feature::term::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("term1");
/// term_freq.add_term("term2");
/// term_freq.add_term("term1");
///
/// assert_eq!(term_freq.term_count("term1"), 2);
/// assert_eq!(term_freq.tf_map()["term2"], 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TermFrequency {
    term_count: IndexMap<String, u64, RandomState>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::with_hasher(RandomState::new()),
            total_term_count: 0,
        }
    }

    /// Count the lowercased, punctuation-stripped words of `text`
    pub fn from_text(text: &str) -> Self {
        let mut tf = Self::new();
        tf.add_terms(&normalizer::tokenize_lowercase(text));
        tf
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// TF calculation
impl TermFrequency {
    /// TF of every term, normalized by the most frequent term.
    /// Values are in (0, 1]; an empty document gives an empty map.
    #[inline]
    pub fn tf_map(&self) -> TermWeights {
        self.tf_map_with::<DefaultTfIdfEngine>()
    }

    /// TF of every term under the given engine
    pub fn tf_map_with<E: TfIdfEngine>(&self) -> TermWeights {
        let max_count = self.most_frequent_term_count();
        if max_count == 0 {
            return TermWeights::default();
        }
        self.term_count
            .iter()
            .map(|(term, &count)| (term.clone(), E::tf(count, max_count)))
            .collect()
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Iterator over terms and their counts
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Total count of all terms
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Occurrence count of a term
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Count of the most frequent term, 0 for an empty document
    #[inline]
    pub fn most_frequent_term_count(&self) -> u64 {
        self.term_count.values().copied().max().unwrap_or(0)
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Distinct terms as &str
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }
}

/// Lowercased, max-normalized term frequencies of `text`.
pub fn term_frequency(text: &str) -> TermWeights {
    TermFrequency::from_text(text).tf_map()
}
