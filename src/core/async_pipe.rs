//! Asynchronous pipeline composition.
//!
//! An `AsyncPipe` performs the same left-to-right fold as [`Pipe`], but
//! resolves any deferred accumulator between steps. Every step can be an
//! ordinary function lifted with [`sync_step`] or an async one lifted
//! with [`async_step`]; the composer treats both uniformly.
//!
//! [`Pipe`]: crate::core::Pipe

use crate::builder::error::BuildError;
use crate::core::outcome::StepOutcome;
use std::future::Future;
use std::sync::Arc;

/// A single pipeline step that may produce a deferred result.
pub type AsyncStep<T> = Arc<dyn Fn(T) -> StepOutcome<T> + Send + Sync>;

/// Lift an ordinary function into an [`AsyncStep`].
///
/// The step's output is always [`StepOutcome::Ready`]; the composer will
/// not suspend after it.
pub fn sync_step<T, F>(f: F) -> AsyncStep<T>
where
    F: Fn(T) -> T + Send + Sync + 'static,
{
    Arc::new(move |input| StepOutcome::Ready(f(input)))
}

/// Lift a future-returning function into an [`AsyncStep`].
///
/// The step's output is always [`StepOutcome::Deferred`]; the composer
/// suspends on it before invoking the next step.
pub fn async_step<T, F, Fut>(f: F) -> AsyncStep<T>
where
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = T> + Send + 'static,
{
    Arc::new(move |input| StepOutcome::deferred(f(input)))
}

/// An asynchronous composer over an ordered, fixed list of steps.
///
/// Invoking the pipe returns a future; awaiting it resolves the previous
/// accumulator before each step, invokes the step, and finally resolves
/// the last outcome. Suspension points occur only at step boundaries —
/// step i+1 never begins before step i's result is fully resolved.
///
/// # Example
///
/// ```rust
/// use pipework::core::{async_step, sync_step, AsyncPipe};
/// use futures::executor::block_on;
///
/// let pipe = AsyncPipe::new(vec![
///     async_step(|n: i32| async move { n + 1 }),
///     sync_step(|n| n * 10),
/// ])
/// .unwrap();
///
/// assert_eq!(block_on(pipe.call(4)), 50);
/// ```
pub struct AsyncPipe<T> {
    steps: Vec<AsyncStep<T>>,
}

impl<T> AsyncPipe<T> {
    /// Create an async pipe from an ordered list of steps.
    ///
    /// Fails with [`BuildError::TooFewSteps`] if fewer than two steps are
    /// given, at construction time.
    pub fn new(steps: Vec<AsyncStep<T>>) -> Result<Self, BuildError> {
        if steps.len() < 2 {
            return Err(BuildError::TooFewSteps { found: steps.len() });
        }
        Ok(Self { steps })
    }

    /// Number of steps in the pipeline (always >= 2).
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Thread `input` through every step, resolving deferred results
    /// between steps, and return the final value.
    ///
    /// The returned future is the pipeline's deferred result; the fold is
    /// strictly sequential, with no internal parallelism. A failing step
    /// aborts the fold at that step — nothing after it runs.
    pub async fn call(&self, input: T) -> T {
        self.feed(StepOutcome::Ready(input)).await
    }

    /// Like [`call`](Self::call), but accepts an initial input that is
    /// itself deferred. The input is resolved before the first step, and
    /// the result is always a plain value — never a nested deferred.
    pub async fn feed(&self, input: StepOutcome<T>) -> T {
        let mut acc = input;
        for step in &self.steps {
            let prev = acc.resolve().await;
            acc = step(prev);
        }
        acc.resolve().await
    }
}

impl<T> Clone for AsyncPipe<T> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<T> std::fmt::Debug for AsyncPipe<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncPipe")
            .field("steps", &self.steps.len())
            .finish()
    }
}
