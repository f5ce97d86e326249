//! Step outcomes: the sum of an immediate value and a deferred one.
//!
//! A pipeline step either produces its output directly or hands back a
//! future that will produce it. `StepOutcome` tags that capability
//! explicitly so the async composer can treat both kinds of step
//! uniformly, resolving deferred outcomes between steps.

use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;

/// The result of invoking a single pipeline step.
///
/// `Ready` carries a value that is already available; `Deferred` carries
/// a boxed future that must be awaited to obtain it. Resolution is the
/// only operation that can suspend, and it suspends only for `Deferred`.
///
/// # Example
///
/// ```rust
/// use pipework::core::StepOutcome;
/// use futures::executor::block_on;
///
/// let ready = StepOutcome::ready(41);
/// assert!(!ready.is_deferred());
/// assert_eq!(block_on(ready.resolve()), 41);
///
/// let deferred = StepOutcome::deferred(async { 41 + 1 });
/// assert!(deferred.is_deferred());
/// assert_eq!(block_on(deferred.resolve()), 42);
/// ```
pub enum StepOutcome<T> {
    /// The step produced its output synchronously.
    Ready(T),
    /// The step's output is still being computed.
    Deferred(BoxFuture<'static, T>),
}

impl<T> StepOutcome<T> {
    /// Wrap an immediately available value.
    pub fn ready(value: T) -> Self {
        StepOutcome::Ready(value)
    }

    /// Wrap a future whose output is the step's value.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        StepOutcome::Deferred(Box::pin(future))
    }

    /// Check whether resolving this outcome would suspend.
    pub fn is_deferred(&self) -> bool {
        matches!(self, StepOutcome::Deferred(_))
    }

    /// Resolve the outcome to its value.
    ///
    /// `Ready` values are returned without suspension; `Deferred` values
    /// suspend the caller until the underlying future completes. Whatever
    /// that future produces (including an error carried in a `Result`
    /// value) is returned unchanged.
    pub async fn resolve(self) -> T {
        match self {
            StepOutcome::Ready(value) => value,
            StepOutcome::Deferred(future) => future.await,
        }
    }
}

// Futures are opaque, so Debug only reveals the ready side.
impl<T: fmt::Debug> fmt::Debug for StepOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            StepOutcome::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl<T> From<T> for StepOutcome<T> {
    fn from(value: T) -> Self {
        StepOutcome::Ready(value)
    }
}
