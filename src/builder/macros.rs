//! Macros for ergonomic pipeline construction.

/// Build a synchronous [`Pipe`](crate::core::Pipe) from step expressions.
///
/// The grammar requires at least two steps, matching the construction
/// precondition; the expansion still goes through the checked
/// constructor, so the result is a `Result`.
///
/// # Example
///
/// ```
/// use pipework::pipe;
///
/// let pipe = pipe![
///     |n: i32| n + 1,
///     |n: i32| n * 10,
/// ]
/// .unwrap();
///
/// assert_eq!(pipe.call(4), 50);
/// ```
#[macro_export]
macro_rules! pipe {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::builder::PipeBuilder::new()
            .step($first)
            .step($second)
            $(.step($rest))*
            .build()
    };
}

/// Build an [`AsyncPipe`](crate::core::AsyncPipe) from lifted step
/// expressions.
///
/// Steps must already be [`AsyncStep`](crate::core::AsyncStep) values,
/// typically produced by [`sync_step`](crate::core::sync_step) and
/// [`async_step`](crate::core::async_step).
///
/// # Example
///
/// ```
/// use pipework::async_pipe;
/// use pipework::core::{async_step, sync_step};
/// use futures::executor::block_on;
///
/// let pipe = async_pipe![
///     async_step(|n: i32| async move { n + 1 }),
///     sync_step(|n: i32| n * 10),
/// ]
/// .unwrap();
///
/// assert_eq!(block_on(pipe.call(4)), 50);
/// ```
#[macro_export]
macro_rules! async_pipe {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::builder::AsyncPipeBuilder::new()
            .outcome_step($first)
            .outcome_step($second)
            $(.outcome_step($rest))*
            .build()
    };
}
