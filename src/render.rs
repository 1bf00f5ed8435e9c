//! Console rendering of set-algebra results.
//!
//! Results print the way a set literal reads on paper:
//!
//! - a non-empty set renders as its elements in ascending order, separated
//!   by `", "` and wrapped in braces: `{1, 2, 3}`
//! - the empty set renders as `set()`, since `{}` would read as an empty map
//! - booleans render capitalized: `True` / `False`
//!
//! # Examples
//!
//! ```rust
//! use std::collections::{BTreeSet, HashSet};
//! use setops::render::{render, Rendered};
//!
//! let ordered = BTreeSet::from([8, 1, 2]);
//! assert_eq!(render(&ordered), "{1, 2, 8}");
//!
//! let hashed: HashSet<i32> = [5, 3, 4].into_iter().collect();
//! assert_eq!(render(&hashed), "{3, 4, 5}");
//!
//! assert_eq!(render(&BTreeSet::<i32>::new()), "set()");
//! assert_eq!(format!("{}", Rendered::new(&true)), "True");
//! ```

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::BuildHasher;

// =============================================================================
// Render Definition
// =============================================================================

/// Types with a console representation.
pub trait Render {
    /// Writes the console representation of `self` to `formatter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying formatter fails.
    fn render_to(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A [`Display`](fmt::Display) adapter over any [`Render`] value.
///
/// Lets rendered values go straight into `write!` / `writeln!` without an
/// intermediate `String`.
#[derive(Debug)]
pub struct Rendered<'a, R: ?Sized>(&'a R);

impl<'a, R: ?Sized> Rendered<'a, R> {
    /// Wraps `value` for display.
    #[inline]
    #[must_use]
    pub const fn new(value: &'a R) -> Self {
        Self(value)
    }
}

impl<R: Render + ?Sized> fmt::Display for Rendered<'_, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render_to(formatter)
    }
}

/// Returns the console representation of `value`.
#[must_use]
pub fn render<R: Render + ?Sized>(value: &R) -> String {
    Rendered::new(value).to_string()
}

// =============================================================================
// Implementations
// =============================================================================

impl Render for bool {
    fn render_to(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(if *self { "True" } else { "False" })
    }
}

impl<T: fmt::Display> Render for BTreeSet<T> {
    fn render_to(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(formatter, self.iter())
    }
}

impl<T: fmt::Display + Ord, S: BuildHasher> Render for HashSet<T, S> {
    fn render_to(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements: Vec<&T> = self.iter().collect();
        elements.sort_unstable();
        write_elements(formatter, elements.into_iter())
    }
}

/// Writes already-ordered elements as `{a, b, c}`, or `set()` when there are none.
fn write_elements<'a, T, I>(formatter: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut elements = elements.peekable();
    if elements.peek().is_none() {
        return formatter.write_str("set()");
    }

    formatter.write_str("{")?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{element}")?;
    }
    formatter.write_str("}")
}
