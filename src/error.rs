//! Error types for review classification.
//!
//! Every fallible operation in this crate returns [`Result`], whose error side is
//! [`ReviewKnnError`].
//!
//! # Examples
//!
//! ```
//! use review_knn::error::{ReviewKnnError, Result};
//!
//! fn check_k(k: usize) -> Result<usize> {
//!     if k == 0 {
//!         return Err(ReviewKnnError::invalid_argument("k must be positive"));
//!     }
//!     Ok(k)
//! }
//!
//! assert!(check_k(0).is_err());
//! ```

use thiserror::Error;

/// The error type for feature extraction, distance and classification.
#[derive(Error, Debug)]
pub enum ReviewKnnError {
    /// A value of the wrong shape reached a feature extractor
    /// (bytes that are not text, a zero shingle length).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Classifier or corpus preconditions were violated
    /// (length mismatch, non-positive k, empty training set, empty corpus).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A computation hit a case with no meaningful value
    /// (a metric returning NaN or a negative distance).
    #[error("Degenerate computation: {0}")]
    DegenerateComputation(String),

    /// A configuration or review record could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReviewKnnError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        ReviewKnnError::InvalidInput(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ReviewKnnError::InvalidArgument(msg.into())
    }

    /// Create a new degenerate computation error.
    pub fn degenerate<S: Into<String>>(msg: S) -> Self {
        ReviewKnnError::DegenerateComputation(msg.into())
    }
}

/// Result type alias for operations that may fail with a [`ReviewKnnError`].
pub type Result<T> = std::result::Result<T, ReviewKnnError>;
