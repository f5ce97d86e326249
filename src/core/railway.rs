//! Railway-oriented error handling for pipeline steps.
//!
//! The composers never inspect errors; a pipeline that carries failures
//! as values is an ordinary `Pipe<Result<T, E>>`. These helpers adapt
//! value-level functions to that shape: once an `Err` enters the line it
//! rides through every wrapped step untouched, and the wrapped function
//! is never invoked on it.

/// Wrap a fallible function so an incoming error sentinel bypasses it.
///
/// `Err` inputs are returned unchanged without invoking `f`; `Ok(v)`
/// inputs are replaced by `f(v)`, which may itself switch the pipeline
/// onto the error track.
///
/// # Example
///
/// ```rust
/// use pipework::core::bind;
///
/// let half = bind(|n: i32| {
///     if n % 2 == 0 {
///         Ok(n / 2)
///     } else {
///         Err("odd".to_string())
///     }
/// });
///
/// assert_eq!(half(Ok(10)), Ok(5));
/// assert_eq!(half(Ok(3)), Err("odd".to_string()));
/// assert_eq!(half(Err("upstream".to_string())), Err("upstream".to_string()));
/// ```
pub fn bind<T, E, F>(f: F) -> impl Fn(Result<T, E>) -> Result<T, E> + Send + Sync
where
    F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
{
    move |result| result.and_then(&f)
}

/// Wrap an ordinary value-transforming function so it runs only on the
/// success track.
///
/// `Err` inputs pass through unchanged; `Ok(v)` becomes `Ok(f(v))`. This
/// lets infallible functions serve as steps in an error-carrying
/// pipeline.
///
/// # Example
///
/// ```rust
/// use pipework::core::lift;
///
/// let double = lift(|n: i32| n * 2);
///
/// assert_eq!(double(Ok(21)), Ok::<_, String>(42));
/// assert_eq!(double(Err("upstream".to_string())), Err("upstream".to_string()));
/// ```
pub fn lift<T, E, F>(f: F) -> impl Fn(Result<T, E>) -> Result<T, E> + Send + Sync
where
    F: Fn(T) -> T + Send + Sync + 'static,
{
    move |result| result.map(&f)
}
