//! Builder for constructing synchronous pipelines.

use crate::builder::error::BuildError;
use crate::core::{Pipe, Step};
use std::sync::Arc;

/// Builder for constructing a [`Pipe`] with a fluent API.
///
/// Steps are appended in invocation order; `build()` validates the
/// minimum-arity precondition.
///
/// # Example
///
/// ```rust
/// use pipework::builder::PipeBuilder;
///
/// let pipe = PipeBuilder::new()
///     .step(|n: i32| n + 1)
///     .step(|n| n * 10)
///     .build()
///     .unwrap();
///
/// assert_eq!(pipe.call(4), 50);
/// ```
pub struct PipeBuilder<T> {
    steps: Vec<Step<T>>,
}

impl<T> PipeBuilder<T> {
    /// Create a new builder with no steps.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step function.
    pub fn step<F>(mut self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.steps.push(Arc::new(f));
        self
    }

    /// Append a pre-wrapped step.
    pub fn step_arc(mut self, step: Step<T>) -> Self {
        self.steps.push(step);
        self
    }

    /// Build the pipe.
    ///
    /// Fails with [`BuildError::TooFewSteps`] if fewer than two steps
    /// were added.
    pub fn build(self) -> Result<Pipe<T>, BuildError> {
        Pipe::new(self.steps)
    }
}

impl<T> Default for PipeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
