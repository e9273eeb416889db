use std::hash::Hash;

use rayon::prelude::*;

use crate::classify::vote::majority_vote;
use crate::error::{ReviewKnnError, Result};
use crate::metric::Metric;
use crate::utils::sort::{Candidate, KSmallest};

/// A training point selected for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a, L> {
    /// position in the training set
    pub index: usize,
    pub distance: f64,
    pub label: &'a L,
}

/// k-nearest-neighbor classifier
///
/// Borrows the training data and labels read-only and holds no mutable state,
/// so one classifier can serve queries from many threads.
///
/// Every query scans the whole training set (O(n) distance calls). Neighbors
/// at equal distance are taken in training-set order; a tie in the vote goes
/// to the tied label whose nearest member ranks first.
#[derive(Debug, Clone)]
pub struct KnnClassifier<'a, D, L, M> {
    data: &'a [D],
    labels: &'a [L],
    k: usize,
    metric: M,
}

impl<'a, D, L, M> KnnClassifier<'a, D, L, M>
where
    L: Clone + Eq + Hash,
    M: Metric<D>,
{
    /// Build a classifier over `data` labelled by `labels`.
    ///
    /// `k` larger than the training set is clamped to its size.
    ///
    /// # Errors
    /// `InvalidArgument` if the training set is empty, the lengths differ, or `k` is 0.
    pub fn new(data: &'a [D], labels: &'a [L], k: usize, metric: M) -> Result<Self> {
        if data.is_empty() {
            return Err(ReviewKnnError::invalid_argument("training set is empty"));
        }
        if data.len() != labels.len() {
            return Err(ReviewKnnError::invalid_argument(format!(
                "{} training documents but {} labels",
                data.len(),
                labels.len()
            )));
        }
        if k == 0 {
            return Err(ReviewKnnError::invalid_argument("k must be positive"));
        }
        let clamped = k.min(data.len());
        if clamped != k {
            tracing::debug!(requested = k, clamped, "k exceeds the training set size");
        }
        tracing::debug!(training = data.len(), k = clamped, "built k-NN classifier");
        Ok(Self {
            data,
            labels,
            k: clamped,
            metric,
        })
    }

    /// Effective neighbor count after clamping
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Size of the training set
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// The `k` closest training points, closest first.
    ///
    /// # Errors
    /// Whatever the metric returns; `DegenerateComputation` if it yields a
    /// NaN or negative distance.
    pub fn neighbors(&self, x: &D) -> Result<Vec<Neighbor<'a, L>>> {
        let mut selection = KSmallest::new(self.k);
        for (index, doc) in self.data.iter().enumerate() {
            let distance = checked(self.metric.distance(x, doc)?, index)?;
            selection.push(Candidate::new(distance, index));
        }
        Ok(self.resolve(selection))
    }

    /// Majority label of the `k` closest training points.
    pub fn classify(&self, x: &D) -> Result<L> {
        let neighbors = self.neighbors(x)?;
        Ok(self.vote(&neighbors))
    }

    /// Turn the classifier into a plain `document -> label` function.
    pub fn into_fn(self) -> impl Fn(&D) -> Result<L> + 'a
    where
        D: 'a,
        M: 'a,
    {
        move |x| self.classify(x)
    }

    fn resolve(&self, selection: KSmallest) -> Vec<Neighbor<'a, L>> {
        let labels: &'a [L] = self.labels;
        selection
            .into_sorted_vec()
            .into_iter()
            .map(|c| Neighbor {
                index: c.index,
                distance: c.distance,
                label: &labels[c.index],
            })
            .collect()
    }

    fn vote(&self, neighbors: &[Neighbor<'a, L>]) -> L {
        // k >= 1 and the training set is non-empty, so there is always a winner
        match majority_vote(neighbors.iter().map(|n| n.label)) {
            Some(label) => label,
            None => self.labels[0].clone(),
        }
    }
}

/// Parallel scans
impl<'a, D, L, M> KnnClassifier<'a, D, L, M>
where
    D: Sync,
    L: Clone + Eq + Hash + Send + Sync,
    M: Metric<D> + Sync,
{
    /// [`neighbors`](Self::neighbors) with the distance scan fanned out over rayon workers.
    ///
    /// Each worker keeps its own bounded selection; the selections are merged
    /// afterwards. The result is identical to the sequential scan.
    pub fn neighbors_par(&self, x: &D) -> Result<Vec<Neighbor<'a, L>>> {
        let k = self.k;
        let selection = self
            .data
            .par_iter()
            .enumerate()
            .try_fold(
                || KSmallest::new(k),
                |mut selection, (index, doc)| {
                    let distance = checked(self.metric.distance(x, doc)?, index)?;
                    selection.push(Candidate::new(distance, index));
                    Ok::<_, ReviewKnnError>(selection)
                },
            )
            .try_reduce(|| KSmallest::new(k), |a, b| Ok(a.merge(b)))?;
        Ok(self.resolve(selection))
    }

    /// [`classify`](Self::classify) over a parallel scan.
    pub fn classify_par(&self, x: &D) -> Result<L> {
        let neighbors = self.neighbors_par(x)?;
        Ok(self.vote(&neighbors))
    }

    /// Classify many queries in parallel, one result per query, in input order.
    pub fn classify_batch(&self, queries: &[D]) -> Vec<Result<L>> {
        tracing::debug!(queries = queries.len(), "classifying batch");
        queries.par_iter().map(|x| self.classify(x)).collect()
    }
}

#[inline]
fn checked(distance: f64, index: usize) -> Result<f64> {
    if distance.is_nan() || distance < 0.0 {
        return Err(ReviewKnnError::degenerate(format!(
            "metric returned {distance} for training document {index}"
        )));
    }
    // -0.0 orders below 0.0 under total_cmp
    Ok(distance + 0.0)
}

/// Build a k-NN classifier; see [`KnnClassifier::new`].
pub fn build_classifier<'a, D, L, M>(
    data: &'a [D],
    labels: &'a [L],
    k: usize,
    metric: M,
) -> Result<KnnClassifier<'a, D, L, M>>
where
    L: Clone + Eq + Hash,
    M: Metric<D>,
{
    KnnClassifier::new(data, labels, k, metric)
}
