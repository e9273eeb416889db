use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

use num::ToPrimitive;
use serde::Serialize;

use crate::classify::KnnClassifier;
use crate::config::FailurePolicy;
use crate::error::{ReviewKnnError, Result};
use crate::evaluate::partition::LabeledSet;
use crate::metric::Metric;

/// `|predicted - actual|` for ordinal labels such as star ratings.
///
/// # Errors
/// `DegenerateComputation` if a label has no numeric value.
pub fn absolute_error<L: ToPrimitive>(predicted: &L, actual: &L) -> Result<f64> {
    match (predicted.to_f64(), actual.to_f64()) {
        (Some(p), Some(a)) => Ok((p - a).abs()),
        _ => Err(ReviewKnnError::degenerate("label has no numeric value")),
    }
}

/// A test document that could not be classified.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationFailure {
    /// position in the test set
    pub index: usize,
    pub message: String,
}

/// Absolute errors of one evaluation run, in test-set order.
///
/// The data a plotting or reporting layer consumes; this crate draws nothing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvaluationReport {
    pub errors: Vec<f64>,
    pub failures: Vec<EvaluationFailure>,
}

impl EvaluationReport {
    /// Number of successfully classified test documents
    pub fn evaluated(&self) -> usize {
        self.errors.len()
    }

    pub fn mean_absolute_error(&self) -> Option<f64> {
        if self.errors.is_empty() {
            return None;
        }
        Some(self.errors.iter().sum::<f64>() / self.errors.len() as f64)
    }

    /// Share of predictions that hit the label exactly
    pub fn exact_match_rate(&self) -> Option<f64> {
        if self.errors.is_empty() {
            return None;
        }
        let exact = self.errors.iter().filter(|&&e| e == 0.0).count();
        Some(exact as f64 / self.errors.len() as f64)
    }

    /// Count of predictions per rounded error value
    pub fn error_histogram(&self) -> BTreeMap<u64, usize> {
        let mut histogram = BTreeMap::new();
        for &error in &self.errors {
            *histogram.entry(error.round() as u64).or_insert(0) += 1;
        }
        histogram
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "evaluated: {}", self.evaluated())?;
        writeln!(f, "failed: {}", self.failures.len())?;
        if let Some(mae) = self.mean_absolute_error() {
            writeln!(f, "mean absolute error: {:.4}", mae)?;
        }
        if let Some(rate) = self.exact_match_rate() {
            writeln!(f, "exact match rate: {:.4}", rate)?;
        }
        for (error, count) in self.error_histogram() {
            writeln!(f, "  |error| = {}: {}", error, count)?;
        }
        Ok(())
    }
}

/// Classify every test document and measure its absolute error.
///
/// With [`FailurePolicy::Abort`] the first failing document (in test order)
/// ends the run with its error; with [`FailurePolicy::Skip`] it is tallied
/// in [`EvaluationReport::failures`] instead.
pub fn evaluate<D, L, M>(
    classifier: &KnnClassifier<'_, D, L, M>,
    test: &LabeledSet<D, L>,
    policy: FailurePolicy,
    parallel: bool,
) -> Result<EvaluationReport>
where
    D: Sync,
    L: Clone + Eq + Hash + Send + Sync + ToPrimitive,
    M: Metric<D> + Sync,
{
    let predictions = if parallel {
        classifier.classify_batch(test.data())
    } else {
        test.data().iter().map(|doc| classifier.classify(doc)).collect()
    };

    let mut report = EvaluationReport::default();
    for (index, (prediction, actual)) in predictions.into_iter().zip(test.labels()).enumerate() {
        match prediction.and_then(|predicted| absolute_error(&predicted, actual)) {
            Ok(error) => report.errors.push(error),
            Err(err) => match policy {
                FailurePolicy::Abort => return Err(err),
                FailurePolicy::Skip => {
                    tracing::warn!(index, error = %err, "skipping test document");
                    report.failures.push(EvaluationFailure {
                        index,
                        message: err.to_string(),
                    });
                }
            },
        }
    }
    tracing::info!(
        evaluated = report.evaluated(),
        failed = report.failures.len(),
        "evaluation finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::build_classifier;
    use crate::document::Document;
    use crate::metric::WordSetJaccard;

    fn gap(a: &f64, b: &f64) -> Result<f64> {
        Ok((a - b).abs())
    }

    #[test]
    fn absolute_error_of_stars() {
        assert_eq!(absolute_error(&5u8, &2u8).unwrap(), 3.0);
        assert_eq!(absolute_error(&2u8, &5u8).unwrap(), 3.0);
        assert_eq!(absolute_error(&4i32, &4i32).unwrap(), 0.0);
    }

    #[test]
    fn report_summaries() {
        let report = EvaluationReport {
            errors: vec![0.0, 1.0, 0.0, 3.0],
            failures: Vec::new(),
        };
        assert_eq!(report.mean_absolute_error(), Some(1.0));
        assert_eq!(report.exact_match_rate(), Some(0.5));
        let histogram = report.error_histogram();
        assert_eq!(histogram.get(&0), Some(&2));
        assert_eq!(histogram.get(&3), Some(&1));
        assert!(report.to_string().contains("mean absolute error: 1.0000"));
        assert_eq!(EvaluationReport::default().mean_absolute_error(), None);
    }

    #[test]
    fn errors_line_up_with_the_test_set() {
        let data = vec![Document::new("lovely lovely place"), Document::new("rude staff awful")];
        let labels = vec![5u8, 1];
        let classifier = build_classifier(&data, &labels, 1, WordSetJaccard).unwrap();

        let test: LabeledSet<Document, u8> = vec![
            (Document::new("lovely place"), 4),
            (Document::new("awful rude staff"), 1),
        ]
        .into_iter()
        .collect();

        for parallel in [false, true] {
            let report = evaluate(&classifier, &test, FailurePolicy::Abort, parallel).unwrap();
            assert_eq!(report.errors, vec![1.0, 0.0]);
        }
    }

    #[test]
    fn failure_policy_decides_abort_or_skip() {
        // fails for queries below zero
        let picky = |a: &f64, b: &f64| -> Result<f64> {
            if *a < 0.0 {
                Err(ReviewKnnError::invalid_input("negative query"))
            } else {
                gap(a, b)
            }
        };
        let data = [0.0f64, 10.0];
        let labels = [1u8, 5];
        let classifier = build_classifier(&data, &labels, 1, picky).unwrap();
        let test: LabeledSet<f64, u8> = vec![(1.0, 1), (-1.0, 1), (9.0, 4)].into_iter().collect();

        assert!(matches!(
            evaluate(&classifier, &test, FailurePolicy::Abort, false),
            Err(ReviewKnnError::InvalidInput(_))
        ));

        let report = evaluate(&classifier, &test, FailurePolicy::Skip, false).unwrap();
        assert_eq!(report.errors, vec![0.0, 1.0]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
    }
}
