//! # setops
//!
//! Elementary set algebra over Rust's built-in set types.
//!
//! ## Overview
//!
//! The library exposes five pure operations on two sets of comparable
//! elements, each returning a fresh set or a boolean:
//!
//! - [`union`](algebra::union): elements in either set
//! - [`intersection`](algebra::intersection): elements in both sets
//! - [`difference`](algebra::difference): elements in the left set only
//! - [`is_subset`](algebra::is_subset): every left element is in the right set
//! - [`is_proper_subset`](algebra::is_proper_subset): subset, and the sets differ
//!
//! The operations work on anything implementing [`SetAlgebra`](algebra::SetAlgebra),
//! which covers `BTreeSet` and `HashSet` (with any default-constructible hasher).
//! Inputs are borrowed and never modified.
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` / `Monoid` with `Union` and `Intersection` wrappers
//! - `demo`: the fixed demonstration scenario and the `setops-demo` binary
//! - `serde`: serialization of demo outcomes
//! - `fxhash`: re-export of `rustc_hash::FxHashSet`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use setops::prelude::*;
//!
//! let a: BTreeSet<i32> = [1, 2, 8].into_iter().collect();
//! let b: BTreeSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
//!
//! assert_eq!(render(&union(&a, &b)), "{1, 2, 3, 4, 5, 8}");
//! assert_eq!(render(&difference(&b, &a)), "{3, 4, 5}");
//! assert_eq!(render(&is_proper_subset(&a, &b)), "False");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use setops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::render::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "demo")]
    pub use crate::demo::*;
}

pub mod algebra;
pub mod render;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "demo")]
pub mod demo;
