//! Demonstration driver for the set operations.
//!
//! Runs one fixed scenario, A = {1, 2, 8} and B = {1, 2, 3, 4, 5}, through
//! six calls in a fixed order and writes each result on its own line:
//!
//! ```text
//! {1, 2, 3, 4, 5, 8}
//! {1, 2}
//! {8}
//! {3, 4, 5}
//! False
//! False
//! ```
//!
//! # Examples
//!
//! ```rust
//! use setops::demo::{Scenario, write_report};
//!
//! let mut output = Vec::new();
//! write_report(&mut output, &Scenario::fixed()).unwrap();
//!
//! let text = String::from_utf8(output).unwrap();
//! assert_eq!(text.lines().next(), Some("{1, 2, 3, 4, 5, 8}"));
//! assert_eq!(text.lines().count(), 6);
//! ```

mod error;

use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;

pub use error::DemoError;

use crate::algebra::{SetAlgebra, difference, intersection, is_proper_subset, is_subset, union};
use crate::render::{Render, Rendered};

// =============================================================================
// Scenario
// =============================================================================

/// The two operands every step is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario<S = BTreeSet<i32>> {
    /// Operand A.
    pub left: S,
    /// Operand B.
    pub right: S,
}

impl<S> Scenario<S> {
    /// Creates a scenario over `left` (A) and `right` (B).
    #[must_use]
    pub const fn new(left: S, right: S) -> Self {
        Self { left, right }
    }
}

impl Scenario {
    /// A = {1, 2, 8}, B = {1, 2, 3, 4, 5}.
    #[must_use]
    pub fn fixed() -> Self {
        Self::new(BTreeSet::from([1, 2, 8]), BTreeSet::from([1, 2, 3, 4, 5]))
    }
}

// =============================================================================
// Step
// =============================================================================

/// One call of the demonstration sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Step {
    /// union(A, B)
    Union,
    /// intersection(A, B)
    Intersection,
    /// difference(A, B)
    DifferenceLeftRight,
    /// difference(B, A)
    DifferenceRightLeft,
    /// isSubset(A, B)
    IsSubset,
    /// isProperSubset(A, B)
    IsProperSubset,
}

impl Step {
    /// Every step, in the order the report prints them.
    pub const ALL: [Self; 6] = [
        Self::Union,
        Self::Intersection,
        Self::DifferenceLeftRight,
        Self::DifferenceRightLeft,
        Self::IsSubset,
        Self::IsProperSubset,
    ];

    /// Performs this step's call on the scenario's operands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use setops::demo::{Outcome, Scenario, Step};
    ///
    /// let scenario = Scenario::fixed();
    /// assert_eq!(
    ///     Step::DifferenceRightLeft.apply(&scenario),
    ///     Outcome::Set(BTreeSet::from([3, 4, 5]))
    /// );
    /// assert_eq!(Step::IsSubset.apply(&scenario), Outcome::Truth(false));
    /// ```
    #[must_use]
    pub fn apply<S: SetAlgebra>(self, scenario: &Scenario<S>) -> Outcome<S> {
        let (a, b) = (&scenario.left, &scenario.right);
        match self {
            Self::Union => Outcome::Set(union(a, b)),
            Self::Intersection => Outcome::Set(intersection(a, b)),
            Self::DifferenceLeftRight => Outcome::Set(difference(a, b)),
            Self::DifferenceRightLeft => Outcome::Set(difference(b, a)),
            Self::IsSubset => Outcome::Truth(is_subset(a, b)),
            Self::IsProperSubset => Outcome::Truth(is_proper_subset(a, b)),
        }
    }

    /// The call this step performs, e.g. `difference(B, A)`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Union => "union(A, B)",
            Self::Intersection => "intersection(A, B)",
            Self::DifferenceLeftRight => "difference(A, B)",
            Self::DifferenceRightLeft => "difference(B, A)",
            Self::IsSubset => "isSubset(A, B)",
            Self::IsProperSubset => "isProperSubset(A, B)",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// The result of one step: a fresh set or a truth value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome<S> {
    /// A set-valued result.
    Set(S),
    /// A boolean result.
    Truth(bool),
}

impl<S: Render> Render for Outcome<S> {
    fn render_to(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(set) => set.render_to(formatter),
            Self::Truth(truth) => truth.render_to(formatter),
        }
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Applies every step to `scenario`, in order.
#[must_use]
pub fn run<S: SetAlgebra>(scenario: &Scenario<S>) -> Vec<Outcome<S>> {
    Step::ALL.iter().map(|step| step.apply(scenario)).collect()
}

/// Writes the rendered outcome of every step to `writer`, one per line.
///
/// # Errors
///
/// Returns [`DemoError::Write`] if a line cannot be written and
/// [`DemoError::Flush`] if the final flush fails.
pub fn write_report<W, S>(writer: &mut W, scenario: &Scenario<S>) -> Result<(), DemoError>
where
    W: Write,
    S: SetAlgebra + Render,
{
    for (step, outcome) in Step::ALL.into_iter().zip(run(scenario)) {
        let rendered = Rendered::new(&outcome);
        tracing::debug!(%step, outcome = %rendered, "step evaluated");
        writeln!(writer, "{rendered}").map_err(|source| DemoError::Write { step, source })?;
    }
    writer.flush().map_err(DemoError::Flush)?;

    tracing::info!(steps = Step::ALL.len(), "report written");
    Ok(())
}
