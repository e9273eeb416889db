use std::collections::BTreeMap;

use crate::document::{Document, Review};

/// Documents with positionally matching labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSet<D, L> {
    data: Vec<D>,
    labels: Vec<L>,
}

impl<D, L> Default for LabeledSet<D, L> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl<D, L> LabeledSet<D, L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, doc: D, label: L) {
        self.data.push(doc);
        self.labels.push(label);
    }

    #[inline]
    pub fn data(&self) -> &[D] {
        &self.data
    }

    #[inline]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&D, &L)> {
        self.data.iter().zip(self.labels.iter())
    }
}

impl<D, L> FromIterator<(D, L)> for LabeledSet<D, L> {
    fn from_iter<I: IntoIterator<Item = (D, L)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (doc, label) in iter {
            set.push(doc, label);
        }
        set
    }
}

/// Documents grouped by label, labels in ascending order, documents in arrival order.
///
/// An explicit value owned by the caller; nothing about a partition outlives it.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<D, L: Ord> {
    buckets: BTreeMap<L, Vec<D>>,
}

impl<D, L: Ord> Partition<D, L> {
    pub fn by_label<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (D, L)>,
    {
        let mut buckets: BTreeMap<L, Vec<D>> = BTreeMap::new();
        for (doc, label) in records {
            buckets.entry(label).or_default().push(doc);
        }
        Self { buckets }
    }

    pub fn bucket(&self, label: &L) -> &[D] {
        match self.buckets.get(label) {
            Some(docs) => docs,
            None => &[],
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.buckets.keys()
    }

    /// Total number of documents
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    /// (label, bucket size) in label order
    pub fn sizes(&self) -> Vec<(&L, usize)> {
        self.buckets.iter().map(|(label, docs)| (label, docs.len())).collect()
    }
}

impl<D, L: Ord + Clone> Partition<D, L> {
    /// Split every bucket in two: the first half (rounded down) trains, the rest tests.
    /// Each set lists buckets in label order.
    pub fn into_halves(self) -> (LabeledSet<D, L>, LabeledSet<D, L>) {
        let mut train = LabeledSet::new();
        let mut test = LabeledSet::new();
        for (label, mut docs) in self.buckets {
            let tail = docs.split_off(docs.len() / 2);
            for doc in docs {
                train.push(doc, label.clone());
            }
            for doc in tail {
                test.push(doc, label.clone());
            }
        }
        (train, test)
    }
}

impl Partition<Document, u8> {
    /// Group reviews by star rating.
    pub fn from_reviews<I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = Review>,
    {
        Self::by_label(reviews.into_iter().map(Review::into_labeled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_are_sorted_by_label_and_keep_arrival_order() {
        let partition = Partition::by_label(vec![("a", 3), ("b", 1), ("c", 3), ("d", 5)]);
        assert_eq!(partition.labels().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(partition.bucket(&3), &["a", "c"]);
        assert!(partition.bucket(&2).is_empty());
        assert_eq!(partition.len(), 4);
    }

    #[test]
    fn halves_cover_every_document_with_matching_labels() {
        let records = vec![("1a", 1), ("1b", 1), ("1c", 1), ("2a", 2), ("5a", 5), ("5b", 5)];
        let (train, test) = Partition::by_label(records).into_halves();

        assert_eq!(train.data(), &["1a", "5a"]);
        assert_eq!(train.labels(), &[1, 5]);
        assert_eq!(test.data(), &["1b", "1c", "2a", "5b"]);
        assert_eq!(test.labels(), &[1, 1, 2, 5]);
        assert_eq!(train.len() + test.len(), 6);
    }

    #[test]
    fn reviews_partition_by_stars() {
        let partition = Partition::from_reviews(vec![
            Review::new("great", 5),
            Review::new("bad", 1),
            Review::new("superb", 5),
        ]);
        assert_eq!(partition.sizes(), vec![(&1, 1), (&5, 2)]);
        assert_eq!(partition.bucket(&5)[1].text(), "superb");
    }

    #[test]
    fn labeled_set_from_pairs() {
        let set: LabeledSet<&str, u8> = vec![("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(set.iter().map(|(d, l)| (*d, *l)).collect::<Vec<_>>(), vec![("x", 1), ("y", 2)]);
        assert!(!set.is_empty());
    }
}
