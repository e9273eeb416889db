use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A training point ranked by its distance to a query.
///
/// Ordered by distance first, then by training index, so equal distances
/// resolve to the earlier training point.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub distance: f64,
    pub index: usize,
}

impl Candidate {
    #[inline]
    pub fn new(distance: f64, index: usize) -> Self {
        Self { distance, index }
    }
}

impl Ord for Candidate {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for Candidate {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Bounded selection of the `k` smallest candidates.
///
/// Keeps a max-heap of at most `k` entries; a new candidate only enters
/// when it beats the current worst one. O(n log k) over a scan.
/// Two selections over disjoint parts of a scan can be merged, which is
/// what the parallel k-NN scan reduces with.
#[derive(Debug, Clone)]
pub struct KSmallest {
    k: usize,
    heap: BinaryHeap<Candidate>,
}

impl KSmallest {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k),
        }
    }

    #[inline]
    pub fn push(&mut self, candidate: Candidate) {
        if self.k == 0 {
            return;
        }
        if self.heap.len() < self.k {
            self.heap.push(candidate);
        } else if let Some(mut worst) = self.heap.peek_mut() {
            if candidate < *worst {
                *worst = candidate;
            }
        }
    }

    /// Fold another selection into this one.
    pub fn merge(mut self, other: KSmallest) -> Self {
        for candidate in other.heap {
            self.push(candidate);
        }
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Selected candidates, closest first.
    pub fn into_sorted_vec(self) -> Vec<Candidate> {
        self.heap.into_sorted_vec()
    }
}

/// The `k` smallest candidates of `iter`, closest first.
pub fn k_smallest<I>(iter: I, k: usize) -> Vec<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut selection = KSmallest::new(k);
    for candidate in iter {
        selection.push(candidate);
    }
    selection.into_sorted_vec()
}
