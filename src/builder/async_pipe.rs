//! Builder for constructing asynchronous pipelines.

use crate::builder::error::BuildError;
use crate::core::{async_step, sync_step, AsyncPipe, AsyncStep};
use std::future::Future;

/// Builder for constructing an [`AsyncPipe`] with a fluent API.
///
/// Sync and async steps can be mixed freely; `build()` validates the
/// minimum-arity precondition.
///
/// # Example
///
/// ```rust
/// use pipework::builder::AsyncPipeBuilder;
/// use futures::executor::block_on;
///
/// let pipe = AsyncPipeBuilder::new()
///     .async_step(|n: i32| async move { n + 1 })
///     .step(|n| n * 10)
///     .build()
///     .unwrap();
///
/// assert_eq!(block_on(pipe.call(4)), 50);
/// ```
pub struct AsyncPipeBuilder<T> {
    steps: Vec<AsyncStep<T>>,
}

impl<T> AsyncPipeBuilder<T> {
    /// Create a new builder with no steps.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append an ordinary synchronous step.
    pub fn step<F>(mut self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.steps.push(sync_step(f));
        self
    }

    /// Append a future-returning step.
    pub fn async_step<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        self.steps.push(async_step(f));
        self
    }

    /// Append a pre-wrapped step.
    pub fn outcome_step(mut self, step: AsyncStep<T>) -> Self {
        self.steps.push(step);
        self
    }

    /// Build the async pipe.
    ///
    /// Fails with [`BuildError::TooFewSteps`] if fewer than two steps
    /// were added.
    pub fn build(self) -> Result<AsyncPipe<T>, BuildError> {
        AsyncPipe::new(self.steps)
    }
}

impl<T> Default for AsyncPipeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
