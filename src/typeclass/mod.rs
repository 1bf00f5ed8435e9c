//! Algebraic structures over sets.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Union`], [`Intersection`]: Wrappers choosing how two sets combine
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use setops::typeclass::{Monoid, Semigroup, Union};
//!
//! let groups = vec![
//!     Union::new(BTreeSet::from([1, 2, 8])),
//!     Union::new(BTreeSet::from([1, 2, 3, 4, 5])),
//! ];
//! assert_eq!(
//!     Union::combine_all(groups).into_inner(),
//!     BTreeSet::from([1, 2, 3, 4, 5, 8])
//! );
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Intersection, Union};
