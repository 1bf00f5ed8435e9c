//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use setops::typeclass::{Intersection, Semigroup};
//!
//! let a = Intersection::new(BTreeSet::from([1, 2, 8]));
//! let b = Intersection::new(BTreeSet::from([1, 2, 3, 4, 5]));
//! assert_eq!(a.combine(b).into_inner(), BTreeSet::from([1, 2]));
//! ```

use crate::algebra::SetAlgebra;

use super::wrappers::{Intersection, Union};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    /// Types can override this for more efficient implementations.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns a default value for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use setops::typeclass::{Intersection, Semigroup};
    ///
    /// let sets = vec![
    ///     Intersection::new(BTreeSet::from([1, 2, 3])),
    ///     Intersection::new(BTreeSet::from([2, 3, 4])),
    ///     Intersection::new(BTreeSet::from([3, 4, 5])),
    /// ];
    /// let common = Intersection::reduce_all(sets).map(Intersection::into_inner);
    /// assert_eq!(common, Some(BTreeSet::from([3])));
    ///
    /// let empty: Vec<Intersection<BTreeSet<i32>>> = vec![];
    /// assert_eq!(Intersection::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Set Wrapper Implementations
// =============================================================================

impl<S: SetAlgebra> Semigroup for Union<S> {
    fn combine(self, other: Self) -> Self {
        Self::new(self.0.union(&other.0))
    }

    fn combine_ref(&self, other: &Self) -> Self {
        Self::new(self.0.union(&other.0))
    }
}

impl<S: SetAlgebra> Semigroup for Intersection<S> {
    fn combine(self, other: Self) -> Self {
        Self::new(self.0.intersection(&other.0))
    }

    fn combine_ref(&self, other: &Self) -> Self {
        Self::new(self.0.intersection(&other.0))
    }
}
