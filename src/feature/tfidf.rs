use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use ahash::RandomState;
use rayon::prelude::*;

use crate::error::Result;
use crate::feature::corpus::Corpus;
use crate::feature::term::{TermFrequency, TermWeights};

/// Per-document TF-IDF weights. Only words of the source document appear as keys.
pub type TfIdfVector = TermWeights;

/// TF-IDF calculation strategy
///
/// `tf` is only called with `0 < count <= max_count`,
/// `idf` only with `0 < doc_freq <= doc_num`.
pub trait TfIdfEngine {
    /// Weight of a term occurring `count` times in a document whose
    /// most frequent term occurs `max_count` times
    fn tf(count: u64, max_count: u64) -> f64;
    /// Weight of a term found in `doc_freq` of `doc_num` documents
    fn idf(doc_num: u64, doc_freq: u64) -> f64;
}

/// Textbook TF-IDF.
/// tf = count / max_count, idf = log2(N / n)
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfIdfEngine;

impl TfIdfEngine for DefaultTfIdfEngine {
    #[inline]
    fn tf(count: u64, max_count: u64) -> f64 {
        if max_count == 0 {
            return 0.0;
        }
        count as f64 / max_count as f64
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        if doc_freq == 0 {
            return 0.0;
        }
        (doc_num as f64 / doc_freq as f64).log2()
    }
}

/// Log-scaled TF and smoothed, max-normalized IDF.
/// Keeps long repetitive reviews from dominating; a term in every document
/// still gets a small positive weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct SublinearTfIdfEngine;

impl TfIdfEngine for SublinearTfIdfEngine {
    #[inline]
    fn tf(count: u64, max_count: u64) -> f64 {
        if count == 0 {
            return 0.0;
        }
        (count as f64 + 1.0).ln() / (max_count as f64 + 1.0).ln()
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        let max_idf = (1.0 + doc_num as f64 / 2.0).ln();
        (1.0 + doc_num as f64 / (1.0 + doc_freq as f64)).ln() / max_idf
    }
}

/// Inverse document frequency of every word seen in a corpus.
///
/// A word that never occurred has no entry, which is distinct from a
/// word with weight 0 (one that occurs in every document).
#[derive(Debug, Clone)]
pub struct IdfTable {
    idf: HashMap<String, f64, RandomState>,
    doc_num: u64,
}

impl IdfTable {
    pub(crate) fn new(idf: HashMap<String, f64, RandomState>, doc_num: u64) -> Self {
        Self { idf, doc_num }
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.idf.contains_key(term)
    }

    /// number of documents the table was computed over
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.idf.iter().map(|(term, &idf)| (term.as_str(), idf))
    }

    /// Weight a document's term frequencies.
    /// Terms without an IDF entry are dropped.
    pub fn weigh<E: TfIdfEngine>(&self, freq: &TermFrequency) -> TfIdfVector {
        freq.tf_map_with::<E>()
            .into_iter()
            .filter_map(|(term, tf)| self.get(&term).map(|idf| (term, tf * idf)))
            .collect()
    }
}

/// TF-IDF vectors of a fixed set of documents plus the shared IDF table.
///
/// The IDF table is computed once in [`TfIdfModel::fit`] and only read afterwards,
/// so [`TfIdfModel::transform`] may run from many threads at once.
#[derive(Debug, Clone)]
pub struct TfIdfModel<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine,
{
    idf: Arc<IdfTable>,
    vectors: Vec<TfIdfVector>,
    _marker: PhantomData<E>,
}

impl<E> TfIdfModel<E>
where
    E: TfIdfEngine,
{
    /// Compute the IDF table and one vector per document.
    /// Output order matches input order.
    ///
    /// # Errors
    /// `InvalidArgument` when `documents` is empty.
    pub fn fit<D>(documents: &[D]) -> Result<Self>
    where
        D: AsRef<str> + Sync,
    {
        let freqs: Vec<TermFrequency> = documents
            .par_iter()
            .map(|doc| TermFrequency::from_text(doc.as_ref()))
            .collect();
        let idf = Arc::new(idf_table_with::<E>(&freqs)?);
        let vectors = freqs.par_iter().map(|freq| idf.weigh::<E>(freq)).collect();
        tracing::debug!(
            documents = documents.len(),
            vocabulary = idf.len(),
            "fitted tf-idf model"
        );
        Ok(Self {
            idf,
            vectors,
            _marker: PhantomData,
        })
    }

    pub fn idf(&self) -> &Arc<IdfTable> {
        &self.idf
    }

    pub fn vectors(&self) -> &[TfIdfVector] {
        &self.vectors
    }

    pub fn into_vectors(self) -> Vec<TfIdfVector> {
        self.vectors
    }

    /// Vector for a document outside the fitted set.
    /// Words the corpus never saw are left out.
    pub fn transform(&self, text: &str) -> TfIdfVector {
        self.idf.weigh::<E>(&TermFrequency::from_text(text))
    }
}

fn idf_table_with<E: TfIdfEngine>(freqs: &[TermFrequency]) -> Result<IdfTable> {
    let corpus = Corpus::new();
    freqs
        .par_iter()
        .for_each(|freq| corpus.add_set(&freq.term_set_ref_str()));
    corpus.idf_table::<E>()
}

/// `log2(N / n_i)` for every word in at least one table.
///
/// # Errors
/// `InvalidArgument` when `freqs` is empty.
pub fn inverse_document_frequency(freqs: &[TermFrequency]) -> Result<IdfTable> {
    idf_table_with::<DefaultTfIdfEngine>(freqs)
}

/// TF-IDF vector of every document, in input order.
/// An empty input yields an empty output.
pub fn tf_idf<D>(documents: &[D]) -> Result<Vec<TfIdfVector>>
where
    D: AsRef<str> + Sync,
{
    if documents.is_empty() {
        return Ok(Vec::new());
    }
    Ok(TfIdfModel::<DefaultTfIdfEngine>::fit(documents)?.into_vectors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReviewKnnError;

    fn freqs(texts: &[&str]) -> Vec<TermFrequency> {
        texts.iter().map(|t| TermFrequency::from_text(t)).collect()
    }

    #[test]
    fn word_in_every_document_has_zero_idf() {
        let idf = inverse_document_frequency(&freqs(&["good food", "good service", "Good!"])).unwrap();
        assert_eq!(idf.get("good"), Some(0.0));
        assert_eq!(idf.doc_num(), 3);
    }

    #[test]
    fn rare_words_weigh_more() {
        let idf = inverse_document_frequency(&freqs(&["a b", "a c", "a b", "a d"])).unwrap();
        assert_eq!(idf.get("d"), Some(2.0));
        assert_eq!(idf.get("b"), Some(1.0));
        assert!(idf.get("d").unwrap() > idf.get("b").unwrap());
    }

    #[test]
    fn absent_word_has_no_entry() {
        let idf = inverse_document_frequency(&freqs(&["a b"])).unwrap();
        assert_eq!(idf.get("zzz"), None);
        assert!(!idf.contains("zzz"));
        assert_eq!(idf.len(), 2);
    }

    #[test]
    fn empty_corpus_is_an_error() {
        assert!(matches!(
            inverse_document_frequency(&[]),
            Err(ReviewKnnError::InvalidArgument(_))
        ));
        assert!(tf_idf::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn vector_keys_are_the_lowercase_words() {
        let vectors = tf_idf(&["The cat, the HAT."]).unwrap();
        let mut keys: Vec<&str> = vectors[0].keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["cat", "hat", "the"]);
    }

    #[test]
    fn output_is_positional_and_weighted() {
        let docs = ["apple apple banana", "banana cherry", "cherry"];
        let vectors = tf_idf(&docs).unwrap();
        assert_eq!(vectors.len(), 3);
        // apple: tf 1.0, idf log2(3/1)
        assert!((vectors[0]["apple"] - 3f64.log2()).abs() < 1e-12);
        // banana in doc 0: tf 0.5, idf log2(3/2)
        assert!((vectors[0]["banana"] - 0.5 * 1.5f64.log2()).abs() < 1e-12);
        assert!(!vectors[1].contains_key("apple"));
        assert_eq!(vectors[2].len(), 1);
    }

    #[test]
    fn empty_document_gets_empty_vector() {
        let vectors = tf_idf(&["", "words here"]).unwrap();
        assert!(vectors[0].is_empty());
        assert_eq!(vectors[1].len(), 2);
    }

    #[test]
    fn transform_drops_unseen_words() {
        let model = TfIdfModel::<DefaultTfIdfEngine>::fit(&["red fish", "blue fish"]).unwrap();
        let v = model.transform("red shoes");
        assert_eq!(v.len(), 1);
        assert_eq!(v["red"], 1.0);
        assert_eq!(model.idf().doc_num(), 2);
    }

    #[test]
    fn sublinear_engine_keeps_common_terms_positive() {
        let model = TfIdfModel::<SublinearTfIdfEngine>::fit(&["x y", "x", "x z"]).unwrap();
        let x = model.idf().get("x").unwrap();
        let z = model.idf().get("z").unwrap();
        assert!(x > 0.0);
        assert!(z > x);
        assert_eq!(SublinearTfIdfEngine::tf(3, 3), 1.0);
    }
}
