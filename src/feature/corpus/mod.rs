use std::sync::atomic::{AtomicU64, Ordering};

use ahash::RandomState;
use dashmap::DashMap;

use crate::error::{ReviewKnnError, Result};
use crate::feature::tfidf::{IdfTable, TfIdfEngine};

/// keep document count and per-term document counts in a thread-safe way
///
/// Filled once, possibly from many rayon workers, then frozen into an
/// [`IdfTable`]. There is no removal path.
#[derive(Debug, Default)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: AtomicU64,
    /// number of documents each term appears in
    pub term_counts: DashMap<Box<str>, u64, RandomState>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: AtomicU64::new(0),
            term_counts: DashMap::with_hasher(RandomState::new()),
        }
    }

    /// Add one document's distinct terms to the corpus
    /// `terms` must not repeat a term, or it is counted twice for this document
    pub fn add_set<T>(&self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num.fetch_add(1, Ordering::Relaxed);
        for term in terms {
            self.term_counts
                .entry(term.as_ref().into())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
    }

    /// Get the number of documents in the corpus
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num.load(Ordering::Relaxed)
    }

    /// Get the number of documents containing `term`
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).map_or(0, |count| *count)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Compute the IDF of every term seen so far.
    ///
    /// # Errors
    /// `InvalidArgument` when no document was added.
    pub fn idf_table<E: TfIdfEngine>(&self) -> Result<IdfTable> {
        let doc_num = self.get_doc_num();
        if doc_num == 0 {
            return Err(ReviewKnnError::invalid_argument(
                "inverse document frequency needs at least one document",
            ));
        }
        let idf = self
            .term_counts
            .iter()
            .map(|entry| (entry.key().to_string(), E::idf(doc_num, *entry.value())))
            .collect();
        Ok(IdfTable::new(idf, doc_num))
    }
}
