use serde::{Deserialize, Serialize};

use crate::error::{ReviewKnnError, Result};
use crate::feature::shingle::{shingles, Shingle};
use crate::feature::term::TermFrequency;
use crate::feature::word_set::{word_set, WordSet};
use crate::utils::normalizer;

/// Document
/// An immutable piece of text. Features are derived on demand and never cached,
/// so a `Document` is cheap to share across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    text: Box<str>,
}

impl Document {
    pub fn new<T: Into<Box<str>>>(text: T) -> Self {
        Self { text: text.into() }
    }

    /// Build a document from raw bytes.
    ///
    /// # Errors
    /// `InvalidInput` if the bytes are not UTF-8 text.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ReviewKnnError::invalid_input(format!("document is not UTF-8 text: {e}")))?;
        Ok(Self::new(text))
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Punctuation-stripped tokens in order, case preserved.
    pub fn words(&self) -> Vec<String> {
        normalizer::tokenize(&self.text)
    }

    /// Distinct punctuation-stripped tokens, case preserved.
    pub fn word_set(&self) -> WordSet {
        word_set(&self.text)
    }

    /// Sliding windows of `length` whitespace-delimited words.
    pub fn shingles(&self, length: usize) -> Result<Vec<Shingle>> {
        shingles(&self.text, length)
    }

    /// Lowercased term counts for the TF-IDF path.
    pub fn term_frequency(&self) -> TermFrequency {
        TermFrequency::from_text(&self.text)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Review record
/// The minimal shape the classifier needs from a review: its text and star rating.
/// Other fields present in the source records are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub stars: u8,
}

impl Review {
    pub fn new<T: Into<String>>(text: T, stars: u8) -> Self {
        Self {
            text: text.into(),
            stars,
        }
    }

    /// Parse one JSON object.
    pub fn from_json(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// Split into a document and its label.
    pub fn into_labeled(self) -> (Document, u8) {
        (Document::new(self.text), self.stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_follow_their_own_normalization() {
        let doc = Document::new("Great food. Great, GREAT service!");
        assert_eq!(doc.words(), vec!["Great", "food", "Great", "GREAT", "service"]);
        assert_eq!(doc.word_set().len(), 4);
        assert_eq!(doc.term_frequency().term_count("great"), 3);
        assert_eq!(doc.shingles(2).unwrap()[0], vec!["Great", "food."]);
    }

    #[test]
    fn from_bytes_rejects_non_text() {
        assert!(matches!(
            Document::from_bytes(&[0xc3, 0x28]),
            Err(ReviewKnnError::InvalidInput(_))
        ));
        assert_eq!(Document::from_bytes(b"fine").unwrap().text(), "fine");
    }

    #[test]
    fn review_parses_and_ignores_extra_fields() {
        let review = Review::from_json(
            r#"{"review_id":"r1","stars":4,"text":"Nice place","votes":{"useful":1}}"#,
        )
        .unwrap();
        assert_eq!(review.stars, 4);

        let (doc, label) = review.into_labeled();
        assert_eq!(doc.text(), "Nice place");
        assert_eq!(label, 4);
    }

    #[test]
    fn review_with_missing_stars_is_a_json_error() {
        let err = Review::from_json(r#"{"text":"no rating"}"#).unwrap_err();
        assert!(matches!(err, ReviewKnnError::Json(_)));
    }
}
