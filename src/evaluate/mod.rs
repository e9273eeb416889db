//! Train/test partitioning and absolute-error evaluation of a classifier.
pub mod experiment;
pub mod partition;
pub mod report;

pub use experiment::Experiment;
pub use partition::{LabeledSet, Partition};
pub use report::{absolute_error, evaluate, EvaluationFailure, EvaluationReport};
