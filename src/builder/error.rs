//! Build errors for pipeline construction.

use thiserror::Error;

/// Errors that can occur when constructing pipelines.
///
/// These are configuration errors: they are surfaced at construction
/// time, never at call time, and the call site must be fixed rather than
/// retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("pipeline requires at least two steps, got {found}")]
    TooFewSteps { found: usize },
}
