//! [`SetAlgebra`] for [`BTreeSet`].
//!
//! Results are collected from the ordered iterators `BTreeSet` already
//! provides, so every output set is built in ascending order.

use std::collections::BTreeSet;

use super::SetAlgebra;

impl<T: Ord + Clone> SetAlgebra for BTreeSet<T> {
    fn union(&self, other: &Self) -> Self {
        BTreeSet::union(self, other).cloned().collect()
    }

    fn intersection(&self, other: &Self) -> Self {
        BTreeSet::intersection(self, other).cloned().collect()
    }

    fn difference(&self, other: &Self) -> Self {
        BTreeSet::difference(self, other).cloned().collect()
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        BTreeSet::symmetric_difference(self, other)
            .cloned()
            .collect()
    }

    fn is_subset(&self, other: &Self) -> bool {
        BTreeSet::is_subset(self, other)
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        BTreeSet::is_disjoint(self, other)
    }

    #[inline]
    fn cardinality(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_union_is_ordered() {
        let a = BTreeSet::from([8, 2, 1]);
        let b = BTreeSet::from([5, 4, 3, 2, 1]);

        let union = SetAlgebra::union(&a, &b);
        assert_eq!(union.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 8]);
    }

    #[rstest]
    fn test_intersection_of_disjoint_sets_is_empty() {
        let a = BTreeSet::from([1, 2]);
        let b = BTreeSet::from([3, 4]);

        assert!(SetAlgebra::intersection(&a, &b).is_empty());
    }

    #[rstest]
    fn test_difference_is_not_symmetric() {
        let a = BTreeSet::from([1, 2, 8]);
        let b = BTreeSet::from([1, 2, 3, 4, 5]);

        assert_eq!(SetAlgebra::difference(&a, &b), BTreeSet::from([8]));
        assert_eq!(SetAlgebra::difference(&b, &a), BTreeSet::from([3, 4, 5]));
    }

    #[rstest]
    fn test_cardinality() {
        let empty: BTreeSet<i32> = BTreeSet::new();
        assert_eq!(empty.cardinality(), 0);
        assert_eq!(BTreeSet::from([1, 1, 2]).cardinality(), 2);
    }
}
