use std::hash::Hash;

use ahash::RandomState;
use indexmap::IndexMap;

/// Most common label among `ranked`, which must be ordered closest first.
///
/// A tie in counts goes to the tied label whose first occurrence is closest.
/// Returns `None` for an empty input.
pub fn majority_vote<'a, L, I>(ranked: I) -> Option<L>
where
    L: Clone + Eq + Hash + 'a,
    I: IntoIterator<Item = &'a L>,
{
    // insertion order is the rank of each label's first occurrence
    let mut counts: IndexMap<&L, usize, RandomState> = IndexMap::default();
    for label in ranked {
        *counts.entry(label).or_insert(0) += 1;
    }
    let mut best: Option<(&L, usize)> = None;
    for (label, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label.clone())
}
