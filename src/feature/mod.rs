//! Feature extraction: shingles, word sets, term frequency and TF-IDF.
pub mod corpus;
pub mod shingle;
pub mod term;
pub mod tfidf;
pub mod word_set;
