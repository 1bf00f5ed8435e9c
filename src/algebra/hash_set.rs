//! [`SetAlgebra`] for [`HashSet`] with any default-constructible hasher.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use super::SetAlgebra;

impl<T, S> SetAlgebra for HashSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity_and_hasher(self.len().max(other.len()), S::default());
        result.extend(HashSet::union(self, other).cloned());
        result
    }

    fn intersection(&self, other: &Self) -> Self {
        HashSet::intersection(self, other).cloned().collect()
    }

    fn difference(&self, other: &Self) -> Self {
        HashSet::difference(self, other).cloned().collect()
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        HashSet::symmetric_difference(self, other)
            .cloned()
            .collect()
    }

    fn is_subset(&self, other: &Self) -> bool {
        HashSet::is_subset(self, other)
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        HashSet::is_disjoint(self, other)
    }

    #[inline]
    fn cardinality(&self) -> usize {
        self.len()
    }
}
