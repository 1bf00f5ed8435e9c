//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! Only [`Union`] is a monoid: its identity is the empty set. The identity
//! for [`Intersection`](super::Intersection) would be the universe of all
//! elements, which a finite container cannot hold.

use crate::algebra::SetAlgebra;

use super::semigroup::Semigroup;
use super::wrappers::Union;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use setops::typeclass::{Monoid, Semigroup, Union};
///
/// let set = Union::new(BTreeSet::from([1, 2]));
/// assert_eq!(Union::empty().combine(set.clone()), set);
/// assert_eq!(set.clone().combine(Union::empty()), set);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use setops::typeclass::{Monoid, Union};
    ///
    /// let sets = [BTreeSet::from([1, 2]), BTreeSet::from([8]), BTreeSet::from([2, 3])]
    ///     .into_iter()
    ///     .map(Union::new);
    /// assert_eq!(Union::combine_all(sets).into_inner(), BTreeSet::from([1, 2, 3, 8]));
    ///
    /// let none: Vec<Union<BTreeSet<i32>>> = vec![];
    /// assert!(Union::combine_all(none).into_inner().is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }
}

impl<S: SetAlgebra> Monoid for Union<S> {
    fn empty() -> Self {
        Self::new(S::default())
    }
}
