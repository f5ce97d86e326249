//! Synchronous pipeline composition.
//!
//! A `Pipe` folds an ordered list of unary functions over an initial
//! input, left to right, with no suspension and no error handling of its
//! own. It is a thin, transparent fold: a panicking step unwinds through
//! the composer untouched, and error-as-value pipelines are built by
//! instantiating the pipe over `Result` with the `railway` helpers.

use crate::builder::error::BuildError;
use std::sync::Arc;

/// A single synchronous pipeline step.
///
/// Steps are shared callables so a composer can be cloned and invoked
/// concurrently without copying the functions themselves.
pub type Step<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// A synchronous composer over an ordered, fixed list of steps.
///
/// Calling the pipe threads the input through every step in order and
/// returns the final accumulator. The step list is immutable once the
/// pipe is constructed, and construction requires at least two steps.
///
/// # Example
///
/// ```rust
/// use pipework::core::{Pipe, Step};
/// use std::sync::Arc;
///
/// let steps: Vec<Step<i32>> = vec![
///     Arc::new(|n| n + 1),
///     Arc::new(|n| n * 10),
/// ];
/// let pipe = Pipe::new(steps).unwrap();
///
/// assert_eq!(pipe.call(4), 50);
/// ```
pub struct Pipe<T> {
    steps: Vec<Step<T>>,
}

impl<T> Pipe<T> {
    /// Create a pipe from an ordered list of steps.
    ///
    /// Fails with [`BuildError::TooFewSteps`] if fewer than two steps are
    /// given. The check happens here, at construction time, never at call
    /// time.
    pub fn new(steps: Vec<Step<T>>) -> Result<Self, BuildError> {
        if steps.len() < 2 {
            return Err(BuildError::TooFewSteps { found: steps.len() });
        }
        Ok(Self { steps })
    }

    /// Number of steps in the pipeline (always >= 2).
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Thread `input` through every step, left to right.
    ///
    /// Purely synchronous. The composer never inspects the accumulator:
    /// in particular, a pipe instantiated over [`StepOutcome`] values
    /// threads deferred accumulators through without resolving them —
    /// use [`AsyncPipe`] when steps produce deferred results.
    ///
    /// [`StepOutcome`]: crate::core::StepOutcome
    /// [`AsyncPipe`]: crate::core::AsyncPipe
    pub fn call(&self, input: T) -> T {
        self.steps.iter().fold(input, |acc, step| step(acc))
    }
}

impl<T> Clone for Pipe<T> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Pipe<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipe")
            .field("steps", &self.steps.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::StepOutcome;
    use crate::core::railway::{bind, lift};
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Clone, Debug, PartialEq)]
    struct PipelineData {
        name: Option<String>,
        value: Option<i32>,
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("this is a bad step")]
    struct BadStep;

    fn get_value(data: PipelineData) -> PipelineData {
        PipelineData {
            name: data.name,
            value: Some(1),
        }
    }

    fn get_name(data: PipelineData) -> PipelineData {
        PipelineData {
            name: Some("Bob".to_string()),
            value: data.value,
        }
    }

    fn upper_name(data: PipelineData) -> PipelineData {
        PipelineData {
            name: data.name.map(|n| n.to_uppercase()),
            value: data.value,
        }
    }

    #[test]
    fn pipes_left_to_right() {
        let pipe = Pipe::new(vec![
            Arc::new(get_value) as Step<PipelineData>,
            Arc::new(get_name),
        ])
        .unwrap();

        let result = pipe.call(PipelineData {
            name: None,
            value: None,
        });

        assert_eq!(
            result,
            PipelineData {
                name: Some("Bob".to_string()),
                value: Some(1),
            }
        );
    }

    #[test]
    fn three_steps_compose() {
        let pipe = Pipe::new(vec![
            Arc::new(get_value) as Step<PipelineData>,
            Arc::new(get_name),
            Arc::new(upper_name),
        ])
        .unwrap();

        let result = pipe.call(PipelineData {
            name: None,
            value: None,
        });

        assert_eq!(result.name, Some("BOB".to_string()));
        assert_eq!(result.value, Some(1));
    }

    #[test]
    fn rejects_zero_steps() {
        let result = Pipe::<i32>::new(vec![]);
        assert_eq!(result.unwrap_err(), BuildError::TooFewSteps { found: 0 });
    }

    #[test]
    fn rejects_one_step() {
        let result = Pipe::new(vec![Arc::new(|n: i32| n + 1) as Step<i32>]);
        assert_eq!(result.unwrap_err(), BuildError::TooFewSteps { found: 1 });
    }

    #[test]
    fn railway_error_skips_later_steps() {
        static PROBE: AtomicBool = AtomicBool::new(false);

        let pipe = Pipe::new(vec![
            Arc::new(lift(get_value)) as Step<Result<PipelineData, BadStep>>,
            Arc::new(lift(get_name)),
            Arc::new(bind(|_: PipelineData| Err(BadStep))),
            Arc::new(lift(|data: PipelineData| {
                PROBE.store(true, Ordering::SeqCst);
                data
            })),
        ])
        .unwrap();

        let result = pipe.call(Ok(PipelineData {
            name: None,
            value: None,
        }));

        assert_eq!(result, Err(BadStep));
        assert!(!PROBE.load(Ordering::SeqCst));
    }

    #[test]
    fn sync_pipe_never_resolves_deferred_accumulators() {
        let add_one = |outcome: StepOutcome<i32>| {
            StepOutcome::deferred(async move { outcome.resolve().await + 1 })
        };

        let pipe = Pipe::new(vec![
            Arc::new(add_one) as Step<StepOutcome<i32>>,
            Arc::new(add_one),
        ])
        .unwrap();

        let accumulator = pipe.call(StepOutcome::ready(40));

        // The accumulator comes back unresolved; the caller must await it.
        assert!(accumulator.is_deferred());
        assert_eq!(block_on(accumulator.resolve()), 42);
    }

    #[test]
    fn identical_pipes_produce_identical_output() {
        let build = || {
            Pipe::new(vec![
                Arc::new(|n: i32| n + 3) as Step<i32>,
                Arc::new(|n: i32| n * 2),
            ])
            .unwrap()
        };

        let first = build();
        let second = build();

        assert_eq!(first.call(5), second.call(5));
        assert_eq!(first.call(5), 16);
    }

    #[test]
    fn clones_share_steps_without_interference() {
        let pipe = Pipe::new(vec![
            Arc::new(|s: String| s + "a") as Step<String>,
            Arc::new(|s: String| s + "b"),
        ])
        .unwrap();
        let clone = pipe.clone();

        assert_eq!(pipe.call("x".to_string()), "xab");
        assert_eq!(clone.call("y".to_string()), "yab");
        assert_eq!(pipe.step_count(), clone.step_count());
    }
}
