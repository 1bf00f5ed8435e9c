//! Set algebra over the standard library's set containers.
//!
//! This module provides the [`SetAlgebra`] trait and a free function for each
//! operation. The free functions exist because `BTreeSet` and `HashSet` have
//! inherent `union` / `intersection` / `difference` methods that return lazy
//! iterators; `setops::algebra::union(&a, &b)` always returns an owned set.
//!
//! - [`union`]: elements present in either operand
//! - [`intersection`]: elements present in both operands
//! - [`difference`]: elements of the left operand absent from the right
//! - [`is_subset`]: every left element is also a right element
//! - [`is_proper_subset`]: subset, and the operands are not equal
//!
//! Further operations: [`symmetric_difference`], [`is_superset`],
//! [`is_proper_superset`], [`is_disjoint`].
//!
//! # Purity
//!
//! Every operation borrows both operands and returns a new value. Nothing is
//! mutated, cached or logged, so each call is referentially transparent.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use setops::algebra::{difference, intersection, is_proper_subset, is_subset, union};
//!
//! let a: BTreeSet<i32> = [1, 2, 8].into_iter().collect();
//! let b: BTreeSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
//!
//! assert_eq!(union(&a, &b), BTreeSet::from([1, 2, 3, 4, 5, 8]));
//! assert_eq!(intersection(&a, &b), BTreeSet::from([1, 2]));
//! assert_eq!(difference(&a, &b), BTreeSet::from([8]));
//! assert_eq!(difference(&b, &a), BTreeSet::from([3, 4, 5]));
//! assert!(!is_subset(&a, &b));
//! assert!(!is_proper_subset(&a, &b));
//! ```

mod btree_set;
mod hash_set;

#[cfg(feature = "fxhash")]
pub use rustc_hash::FxHashSet;

// =============================================================================
// SetAlgebra Definition
// =============================================================================

/// Set-theoretic operations on a finite set container.
///
/// Implemented for [`BTreeSet`](std::collections::BTreeSet) and
/// [`HashSet`](std::collections::HashSet). The element bounds of each
/// implementation (`Ord`, or `Hash + Eq`) are what make elements comparable;
/// there is no runtime failure mode.
///
/// # Laws
///
/// For all `a`, `b`:
///
/// ```text
/// a.union(b) == b.union(a)
/// a.intersection(b) == b.intersection(a)
/// a.is_subset(b) == a.difference(b).is_empty()
/// a.union(b).cardinality() + a.intersection(b).cardinality()
///     == a.cardinality() + b.cardinality()
/// ```
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use setops::algebra::SetAlgebra;
///
/// let a: HashSet<i32> = [1, 2].into_iter().collect();
/// let b: HashSet<i32> = [2, 3].into_iter().collect();
///
/// let union = SetAlgebra::union(&a, &b);
/// assert_eq!(union.cardinality(), 3);
/// assert!(SetAlgebra::is_subset(&a, &union));
/// ```
pub trait SetAlgebra: Sized + Default + PartialEq {
    /// Returns a new set with every element of `self` and `other`.
    #[must_use]
    fn union(&self, other: &Self) -> Self;

    /// Returns a new set with the elements present in both `self` and `other`.
    ///
    /// The result is empty when the operands are disjoint.
    #[must_use]
    fn intersection(&self, other: &Self) -> Self;

    /// Returns a new set with the elements of `self` that are not in `other`.
    ///
    /// Not symmetric: `a.difference(b)` and `b.difference(a)` differ in general.
    #[must_use]
    fn difference(&self, other: &Self) -> Self;

    /// Returns a new set with the elements in exactly one of `self` and `other`.
    #[must_use]
    fn symmetric_difference(&self, other: &Self) -> Self;

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// The empty set is a subset of every set, and every set is a subset of
    /// itself.
    fn is_subset(&self, other: &Self) -> bool;

    /// Returns `true` if `self` and `other` have no element in common.
    fn is_disjoint(&self, other: &Self) -> bool;

    /// Returns the number of elements.
    fn cardinality(&self) -> usize;

    /// Returns `true` if every element of `other` is also in `self`.
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` and the two differ.
    ///
    /// Equality is over the full contents, not the cardinalities: two sets of
    /// the same size with different elements are never proper subsets of
    /// each other, and neither are they subsets.
    fn is_proper_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && self != other
    }

    /// Returns `true` if `other` is a proper subset of `self`.
    fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Returns the union of `left` and `right`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use setops::algebra::union;
///
/// let a: BTreeSet<i32> = [1, 2, 8].into_iter().collect();
/// let b: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(union(&a, &b), BTreeSet::from([1, 2, 3, 8]));
/// ```
#[must_use]
pub fn union<S: SetAlgebra>(left: &S, right: &S) -> S {
    left.union(right)
}

/// Returns the intersection of `left` and `right`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use setops::algebra::intersection;
///
/// let a: BTreeSet<i32> = [1, 2, 8].into_iter().collect();
/// let b: BTreeSet<i32> = [3, 4].into_iter().collect();
/// assert!(intersection(&a, &b).is_empty());
/// ```
#[must_use]
pub fn intersection<S: SetAlgebra>(left: &S, right: &S) -> S {
    left.intersection(right)
}

/// Returns the elements of `left` that are not in `right`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use setops::algebra::difference;
///
/// let a: BTreeSet<i32> = [1, 2, 8].into_iter().collect();
/// let b: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(difference(&a, &b), BTreeSet::from([8]));
/// assert_eq!(difference(&b, &a), BTreeSet::from([3]));
/// ```
#[must_use]
pub fn difference<S: SetAlgebra>(left: &S, right: &S) -> S {
    left.difference(right)
}

/// Returns the elements in exactly one of `left` and `right`.
#[must_use]
pub fn symmetric_difference<S: SetAlgebra>(left: &S, right: &S) -> S {
    left.symmetric_difference(right)
}

/// Returns `true` if every element of `left` is in `right`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use setops::algebra::is_subset;
///
/// let empty: BTreeSet<i32> = BTreeSet::new();
/// let b: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
/// assert!(is_subset(&empty, &b));
/// assert!(is_subset(&b, &b));
/// assert!(!is_subset(&b, &empty));
/// ```
pub fn is_subset<S: SetAlgebra>(left: &S, right: &S) -> bool {
    left.is_subset(right)
}

/// Returns `true` if `left` is a subset of `right` and not equal to it.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use setops::algebra::is_proper_subset;
///
/// let empty: BTreeSet<i32> = BTreeSet::new();
/// let b: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
/// assert!(is_proper_subset(&empty, &b));
/// assert!(!is_proper_subset(&b, &b));
/// ```
pub fn is_proper_subset<S: SetAlgebra>(left: &S, right: &S) -> bool {
    left.is_proper_subset(right)
}

/// Returns `true` if every element of `right` is in `left`.
pub fn is_superset<S: SetAlgebra>(left: &S, right: &S) -> bool {
    left.is_superset(right)
}

/// Returns `true` if `right` is a proper subset of `left`.
pub fn is_proper_superset<S: SetAlgebra>(left: &S, right: &S) -> bool {
    left.is_proper_superset(right)
}

/// Returns `true` if `left` and `right` share no element.
pub fn is_disjoint<S: SetAlgebra>(left: &S, right: &S) -> bool {
    left.is_disjoint(right)
}

// =============================================================================
// Compile-time Assertions
// =============================================================================

static_assertions::assert_impl_all!(std::collections::BTreeSet<i32>: SetAlgebra, Send, Sync);
static_assertions::assert_impl_all!(std::collections::HashSet<i32>: SetAlgebra, Send, Sync);
static_assertions::assert_impl_all!(std::collections::BTreeSet<String>: SetAlgebra);
