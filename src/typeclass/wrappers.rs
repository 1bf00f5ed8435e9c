//! Set wrapper types for different algebraic operations.
//!
//! A set can be combined with another by union or by intersection. These
//! newtype wrappers select which one `Semigroup::combine` performs.
//!
//! # Available Wrappers
//!
//! - [`Union`]: union-based semigroup/monoid (identity: the empty set)
//! - [`Intersection`]: intersection-based semigroup

// =============================================================================
// Union Wrapper
// =============================================================================

/// A newtype wrapper that combines sets by union.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use setops::typeclass::{Semigroup, Union};
///
/// let a = Union::new(BTreeSet::from([1, 2]));
/// let b = Union::new(BTreeSet::from([2, 3]));
/// assert_eq!(a.combine(b), Union::new(BTreeSet::from([1, 2, 3])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Union<S>(pub S);

impl<S> Union<S> {
    /// Creates a new `Union` wrapping the given set.
    #[inline]
    pub const fn new(value: S) -> Self {
        Self(value)
    }

    /// Consumes the `Union` and returns the inner set.
    #[inline]
    pub fn into_inner(self) -> S {
        self.0
    }

    /// Returns a reference to the inner set.
    #[inline]
    pub const fn as_inner(&self) -> &S {
        &self.0
    }
}

impl<S> From<S> for Union<S> {
    fn from(value: S) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Intersection Wrapper
// =============================================================================

/// A newtype wrapper that combines sets by intersection.
///
/// There is no `Monoid` instance: the identity would be the set of every
/// possible element.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use setops::typeclass::{Intersection, Semigroup};
///
/// let a = Intersection::new(BTreeSet::from([1, 2]));
/// let b = Intersection::new(BTreeSet::from([2, 3]));
/// assert_eq!(a.combine(b), Intersection::new(BTreeSet::from([2])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection<S>(pub S);

impl<S> Intersection<S> {
    /// Creates a new `Intersection` wrapping the given set.
    #[inline]
    pub const fn new(value: S) -> Self {
        Self(value)
    }

    /// Consumes the `Intersection` and returns the inner set.
    #[inline]
    pub fn into_inner(self) -> S {
        self.0
    }

    /// Returns a reference to the inner set.
    #[inline]
    pub const fn as_inner(&self) -> &S {
        &self.0
    }
}

impl<S> From<S> for Intersection<S> {
    fn from(value: S) -> Self {
        Self::new(value)
    }
}
