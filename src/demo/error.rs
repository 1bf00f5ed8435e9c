//! Errors raised while writing the demonstration report.

use std::io;

use thiserror::Error;

use super::Step;

/// Failure while writing the report to its output stream.
///
/// The set operations themselves cannot fail; only the console write can.
///
/// # Examples
///
/// ```
/// use std::io;
/// use setops::demo::{DemoError, Step};
///
/// let error = DemoError::Write {
///     step: Step::Union,
///     source: io::Error::from(io::ErrorKind::BrokenPipe),
/// };
/// assert_eq!(error.to_string(), "failed to write the result of union(A, B)");
/// ```
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing the line for `step` failed.
    #[error("failed to write the result of {step}")]
    Write {
        /// The step whose result could not be written.
        step: Step,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Flushing the output stream after the last line failed.
    #[error("failed to flush the report")]
    Flush(#[source] io::Error),
}
