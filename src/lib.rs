//! This crate classifies short reviews by star rating with k-nearest-neighbors
//! over lexical features: word sets, word shingles and TF-IDF vectors.
//!
//! The scan behind each classification is exhaustive, one distance per training
//! document. That is fine for thousands of reviews and far too slow for millions;
//! an approximate index would have to sit in front of `KnnClassifier`.

pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod evaluate;
pub mod feature;
pub mod metric;
pub mod utils;

/// Document
/// Immutable text with its features derived on demand:
/// - `words`: punctuation-stripped tokens, case preserved
/// - `word_set`: the distinct words
/// - `shingles`: sliding windows of consecutive raw words
/// - `term_frequency`: lowercased word counts for the TF-IDF path
///
/// `Review` is the `{ text, stars }` record a loader hands over.
pub use document::{Document, Review};

/// Error type
/// Every fallible operation returns `Result<T>` with a `ReviewKnnError`:
/// - `InvalidInput`: a feature extractor got something that is not usable text
/// - `InvalidArgument`: classifier or corpus preconditions were violated
/// - `DegenerateComputation`: a metric produced a NaN or negative distance
pub use error::{Result, ReviewKnnError};

/// Feature extractors
/// - `shingles`: every window of `length` consecutive words
/// - `word_set`: distinct words of a document
/// - `term_frequency`: word frequency divided by the document's most frequent word
/// - `inverse_document_frequency`: `log2(N / n)` per word over a corpus
/// - `tf_idf`: per-document TF times corpus IDF, positional with the input
pub use feature::{
    shingle::shingles,
    term::{term_frequency, TermFrequency},
    tfidf::{inverse_document_frequency, tf_idf, IdfTable, TfIdfModel, TfIdfVector},
    word_set::{word_set, WordSet},
};

/// TF-IDF Calculation Engine Trait
/// Plugs a TF and IDF formula into `TfIdfModel<E>`.
/// `DefaultTfIdfEngine` is the textbook `count / max` and `log2(N / n)`;
/// `SublinearTfIdfEngine` damps repeated words and smooths the IDF.
pub use feature::tfidf::{DefaultTfIdfEngine, SublinearTfIdfEngine, TfIdfEngine};

/// Distance metrics
/// `Metric<D>` is the capability the classifier needs: a symmetric,
/// non-negative distance. Closures `Fn(&D, &D) -> Result<f64>` qualify.
/// - `jaccard_distance` / `JaccardDistance`: over precomputed sets
/// - `WordSetJaccard`: over the word sets of two documents
/// - `ShingleJaccard`: over the shingle sets of two documents
/// - `TfIdfCosineDistance`: `1 - cos` over TF-IDF vectors
pub use metric::{jaccard_distance, JaccardDistance, Metric, ShingleJaccard, TfIdfCosineDistance, WordSetJaccard};

/// k-NN classifier
/// Exhaustive scan per query, `k` smallest distances, majority vote.
///
/// ```
/// use review_knn::{build_classifier, Document, WordSetJaccard};
///
/// let data = vec![Document::new("cats are great"), Document::new("terrible service")];
/// let labels = vec![5u8, 1];
/// let classifier = build_classifier(&data, &labels, 1, WordSetJaccard).unwrap();
/// assert_eq!(classifier.classify(&Document::new("cats are great")).unwrap(), 5);
/// ```
pub use classify::{build_classifier, majority_vote, KnnClassifier, Neighbor};

/// Experiment configuration and evaluation
pub use config::{FailurePolicy, KnnConfig, MetricKind};
pub use evaluate::{evaluate, EvaluationReport, Experiment, LabeledSet, Partition};
