//! Property-based tests for the set algebra laws.
//!
//! Every law is checked against both `BTreeSet` and `HashSet` so the two
//! `SetAlgebra` implementations are held to the same contract.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use setops::algebra::{
    SetAlgebra, difference, intersection, is_disjoint, is_proper_subset, is_subset, is_superset,
    symmetric_difference, union,
};

fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20..20i32, 0..30)
}

fn btree(elements: Vec<i32>) -> BTreeSet<i32> {
    elements.into_iter().collect()
}

fn hash(elements: Vec<i32>) -> HashSet<i32> {
    elements.into_iter().collect()
}

// =============================================================================
// Commutativity
// Description: A ∪ B = B ∪ A and A ∩ B = B ∩ A
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(left in elements(), right in elements()) {
        let (a, b) = (btree(left.clone()), btree(right.clone()));
        prop_assert_eq!(union(&a, &b), union(&b, &a));

        let (a, b) = (hash(left), hash(right));
        prop_assert_eq!(union(&a, &b), union(&b, &a));
    }

    #[test]
    fn prop_intersection_commutativity_law(left in elements(), right in elements()) {
        let (a, b) = (btree(left.clone()), btree(right.clone()));
        prop_assert_eq!(intersection(&a, &b), intersection(&b, &a));

        let (a, b) = (hash(left), hash(right));
        prop_assert_eq!(intersection(&a, &b), intersection(&b, &a));
    }
}

// =============================================================================
// Idempotence
// Description: A ∪ A = A, A ∩ A = A, A - A = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_self_application_law(values in elements()) {
        let a = btree(values.clone());
        prop_assert_eq!(union(&a, &a), a.clone());
        prop_assert_eq!(intersection(&a, &a), a.clone());
        prop_assert!(difference(&a, &a).is_empty());

        let a = hash(values);
        prop_assert_eq!(union(&a, &a), a.clone());
        prop_assert_eq!(intersection(&a, &a), a.clone());
        prop_assert!(difference(&a, &a).is_empty());
    }
}

// =============================================================================
// Subset Characterization
// Description: A ⊆ B iff A - B = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_iff_empty_difference(left in elements(), right in elements()) {
        let (a, b) = (btree(left.clone()), btree(right.clone()));
        prop_assert_eq!(is_subset(&a, &b), difference(&a, &b).is_empty());

        let (a, b) = (hash(left), hash(right));
        prop_assert_eq!(is_subset(&a, &b), difference(&a, &b).is_empty());
    }

    #[test]
    fn prop_subset_of_union(left in elements(), right in elements()) {
        let (a, b) = (btree(left), btree(right));
        let joined = union(&a, &b);

        prop_assert!(is_subset(&a, &joined));
        prop_assert!(is_subset(&b, &joined));
        prop_assert!(is_superset(&joined, &a));
    }
}

// =============================================================================
// Proper Subset
// Description: A ⊂ B implies A ⊆ B and A ≠ B
// =============================================================================

proptest! {
    #[test]
    fn prop_proper_subset_implies_subset_and_inequality(
        left in elements(),
        right in elements()
    ) {
        let (a, b) = (btree(left.clone()), btree(right.clone()));
        if is_proper_subset(&a, &b) {
            prop_assert!(is_subset(&a, &b));
            prop_assert_ne!(a, b);
        }

        let (a, b) = (hash(left), hash(right));
        if is_proper_subset(&a, &b) {
            prop_assert!(is_subset(&a, &b));
            prop_assert_ne!(a, b);
        }
    }

    #[test]
    fn prop_intersection_is_subset_of_both(left in elements(), right in elements()) {
        let (a, b) = (hash(left), hash(right));
        let common = intersection(&a, &b);

        prop_assert!(is_subset(&common, &a));
        prop_assert!(is_subset(&common, &b));
    }
}

// =============================================================================
// Inclusion-Exclusion
// Description: |A ∪ B| + |A ∩ B| = |A| + |B|
// =============================================================================

proptest! {
    #[test]
    fn prop_inclusion_exclusion_law(left in elements(), right in elements()) {
        let (a, b) = (btree(left.clone()), btree(right.clone()));
        prop_assert_eq!(
            union(&a, &b).cardinality() + intersection(&a, &b).cardinality(),
            a.cardinality() + b.cardinality()
        );

        let (a, b) = (hash(left), hash(right));
        prop_assert_eq!(
            union(&a, &b).cardinality() + intersection(&a, &b).cardinality(),
            a.cardinality() + b.cardinality()
        );
    }
}

// =============================================================================
// Symmetric Difference and Disjointness
// Description: A Δ B = (A - B) ∪ (B - A); A - B and B are disjoint
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_decomposition(left in elements(), right in elements()) {
        let (a, b) = (btree(left), btree(right));
        prop_assert_eq!(
            symmetric_difference(&a, &b),
            union(&difference(&a, &b), &difference(&b, &a))
        );
    }

    #[test]
    fn prop_difference_is_disjoint_from_right(left in elements(), right in elements()) {
        let (a, b) = (hash(left), hash(right));
        prop_assert!(is_disjoint(&difference(&a, &b), &b));
    }
}

// =============================================================================
// Purity
// Description: Operands are unchanged by every operation
// =============================================================================

proptest! {
    #[test]
    fn prop_operands_unchanged(left in elements(), right in elements()) {
        let (a, b) = (btree(left), btree(right));
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = union(&a, &b);
        let _ = intersection(&a, &b);
        let _ = difference(&a, &b);
        let _ = difference(&b, &a);
        let _ = is_subset(&a, &b);
        let _ = is_proper_subset(&a, &b);

        prop_assert_eq!(a, a_before);
        prop_assert_eq!(b, b_before);
    }
}

// =============================================================================
// Literal Scenarios
// =============================================================================

#[test]
fn fixed_scenario() {
    let a = BTreeSet::from([1, 2, 8]);
    let b = BTreeSet::from([1, 2, 3, 4, 5]);

    assert_eq!(union(&a, &b), BTreeSet::from([1, 2, 3, 4, 5, 8]));
    assert_eq!(intersection(&a, &b), BTreeSet::from([1, 2]));
    assert_eq!(difference(&a, &b), BTreeSet::from([8]));
    assert_eq!(difference(&b, &a), BTreeSet::from([3, 4, 5]));
    assert!(!is_subset(&a, &b));
    assert!(!is_proper_subset(&a, &b));
}

#[test]
fn empty_left_operand_is_proper_subset() {
    let a: BTreeSet<i32> = BTreeSet::new();
    let b = BTreeSet::from([1, 2, 3]);

    assert!(is_subset(&a, &b));
    assert!(is_proper_subset(&a, &b));
}

#[test]
fn equal_operands_are_not_proper_subsets() {
    let a = BTreeSet::from([1, 2, 3]);
    let b = BTreeSet::from([1, 2, 3]);

    assert!(is_subset(&a, &b));
    assert!(!is_proper_subset(&a, &b));
}
