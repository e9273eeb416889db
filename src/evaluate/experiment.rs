use crate::classify::KnnClassifier;
use crate::config::{KnnConfig, MetricKind};
use crate::document::{Document, Review};
use crate::error::Result;
use crate::evaluate::partition::{LabeledSet, Partition};
use crate::evaluate::report::{evaluate, EvaluationReport};
use crate::metric::{Metric, ShingleJaccard, WordSetJaccard};
use crate::utils::timer::ScopedTimer;

/// Star-rating experiment
///
/// Partitions reviews by stars, trains on the first half of every star
/// bucket, classifies the second half and reports the absolute errors.
///
/// # Examples
/// ```
/// use review_knn::config::KnnConfig;
/// use review_knn::document::Review;
/// use review_knn::evaluate::Experiment;
///
/// let reviews = vec![
///     Review::new("awful food rude staff", 1),
///     Review::new("awful food and rude staff", 1),
///     Review::new("lovely food friendly staff", 5),
///     Review::new("lovely food and friendly staff", 5),
/// ];
/// let config = KnnConfig { k: 1, ..KnnConfig::default() };
/// let report = Experiment::new(config).unwrap().run(reviews).unwrap();
/// assert_eq!(report.errors, vec![0.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Experiment {
    config: KnnConfig,
}

impl Experiment {
    /// # Errors
    /// `InvalidArgument` if the configuration does not validate.
    pub fn new(config: KnnConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &KnnConfig {
        &self.config
    }

    pub fn run<I>(&self, reviews: I) -> Result<EvaluationReport>
    where
        I: IntoIterator<Item = Review>,
    {
        let (train, test) = {
            let _timer = ScopedTimer::new("partition");
            let partition = Partition::from_reviews(reviews);
            tracing::info!(sizes = ?partition.sizes(), "partitioned reviews by stars");
            partition.into_halves()
        };
        tracing::info!(train = train.len(), test = test.len(), "split into train and test");

        match self.config.metric {
            MetricKind::WordSetJaccard => self.train_and_test(&train, &test, WordSetJaccard),
            MetricKind::ShingleJaccard => {
                let metric = ShingleJaccard::new(self.config.shingle_length)?;
                self.train_and_test(&train, &test, metric)
            }
        }
    }

    fn train_and_test<M>(
        &self,
        train: &LabeledSet<Document, u8>,
        test: &LabeledSet<Document, u8>,
        metric: M,
    ) -> Result<EvaluationReport>
    where
        M: Metric<Document> + Sync,
    {
        let classifier = {
            let _timer = ScopedTimer::new("train");
            KnnClassifier::new(train.data(), train.labels(), self.config.k, metric)?
        };
        let _timer = ScopedTimer::new("test");
        evaluate(
            &classifier,
            test,
            self.config.failure_policy,
            self.config.parallel_scan,
        )
    }
}
