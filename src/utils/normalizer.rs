use crate::error::{ReviewKnnError, Result};

/// Whether `c` is dropped by [`strip_punctuation`].
///
/// ASCII punctuation plus the general punctuation block (curly quotes,
/// dashes, ellipsis) and the common CJK marks.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(c, '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}' | '\u{3001}'..='\u{3003}')
}

/// Remove every punctuation character.
/// Removed characters map to nothing, not to a separator: `"don't"` becomes `"dont"`.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|&c| !is_punctuation(c)).collect()
}

/// Whitespace split with punctuation kept.
/// This is the view shingles are built from.
#[inline]
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Punctuation-stripped, whitespace-split tokens. Case is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    strip_punctuation(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Punctuation-stripped, lowercased tokens.
/// Only the term-frequency path folds case.
pub fn tokenize_lowercase(text: &str) -> Vec<String> {
    strip_punctuation(text)
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// [`tokenize`] over raw bytes.
///
/// # Errors
/// `InvalidInput` when the bytes are not UTF-8 text.
pub fn tokenize_bytes(bytes: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ReviewKnnError::invalid_input(format!("document is not UTF-8 text: {e}")))?;
    Ok(tokenize(text))
}
