use serde::{Deserialize, Serialize};

use crate::error::{ReviewKnnError, Result};

/// Which distance the experiment classifies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Jaccard distance of punctuation-stripped word sets
    #[default]
    WordSetJaccard,
    /// Jaccard distance of word shingle sets
    ShingleJaccard,
}

/// What evaluation does when a single test document fails to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// stop at the first failure and return it
    #[default]
    Abort,
    /// record the failure and keep going
    Skip,
}

/// Experiment configuration
///
/// Missing fields take their defaults.
///
/// # Examples
/// ```
/// use review_knn::config::{KnnConfig, MetricKind};
///
/// let config = KnnConfig::from_json_str(r#"{ "k": 3, "metric": "shingle_jaccard" }"#).unwrap();
/// assert_eq!(config.k, 3);
/// assert_eq!(config.metric, MetricKind::ShingleJaccard);
/// assert_eq!(config.shingle_length, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnnConfig {
    /// number of neighbors that vote
    pub k: usize,
    /// words per shingle for [`MetricKind::ShingleJaccard`]
    pub shingle_length: usize,
    pub metric: MetricKind,
    /// fan each query's distance scan out over rayon workers
    pub parallel_scan: bool,
    pub failure_policy: FailurePolicy,
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self {
            k: 5,
            shingle_length: 4,
            metric: MetricKind::default(),
            parallel_scan: false,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl KnnConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: KnnConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// `InvalidArgument` for a zero `k` or zero `shingle_length`.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(ReviewKnnError::invalid_argument("k must be positive"));
        }
        if self.shingle_length == 0 {
            return Err(ReviewKnnError::invalid_argument("shingle_length must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = KnnConfig::from_json_str("{}").unwrap();
        assert_eq!(config, KnnConfig::default());
        assert_eq!(config.k, 5);
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
    }

    #[test]
    fn zero_k_is_rejected() {
        assert!(matches!(
            KnnConfig::from_json_str(r#"{ "k": 0 }"#),
            Err(ReviewKnnError::InvalidArgument(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            KnnConfig::from_json_str(r#"{ "k": "five" }"#),
            Err(ReviewKnnError::Json(_))
        ));
    }

    #[test]
    fn round_trips_through_json() {
        let config = KnnConfig {
            k: 9,
            failure_policy: FailurePolicy::Skip,
            parallel_scan: true,
            ..KnnConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""failure_policy":"skip""#));
        assert_eq!(KnnConfig::from_json_str(&json).unwrap(), config);
    }
}
