//! Pipework: a pure functional pipeline composition library
//!
//! Pipework builds a single callable out of an ordered list of unary
//! functions: the input is threaded through every step left to right,
//! and any deferred (future-valued) step result is resolved before the
//! next step runs. The composers are thin, transparent folds — they add
//! no retry, branching, or error recovery of their own.
//!
//! # Core Concepts
//!
//! - **`Pipe`**: synchronous composition, a plain left-to-right fold
//! - **`AsyncPipe`**: the same fold with suspension points between steps,
//!   accepting sync and async steps uniformly
//! - **`StepOutcome`**: the `Ready(T) | Deferred(future)` sum a step may
//!   produce
//! - **Railway helpers**: `bind` and `lift` adapt value-level functions
//!   to pipelines that carry errors as `Result` values
//!
//! # Example
//!
//! ```rust
//! use pipework::builder::PipeBuilder;
//! use pipework::core::{bind, lift};
//!
//! // A plain pipeline of value transformations.
//! let shout = PipeBuilder::new()
//!     .step(|s: String| s.trim().to_string())
//!     .step(|s: String| s.to_uppercase())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(shout.call("  hello  ".to_string()), "HELLO");
//!
//! // The same machinery carries errors as values: once a step returns
//! // Err, every later bound step is skipped.
//! let safe_halve = PipeBuilder::new()
//!     .step(bind(|n: i32| {
//!         if n % 2 == 0 {
//!             Ok(n / 2)
//!         } else {
//!             Err("odd input".to_string())
//!         }
//!     }))
//!     .step(lift(|n: i32| n + 1))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(safe_halve.call(Ok(10)), Ok(6));
//! assert_eq!(safe_halve.call(Ok(3)), Err("odd input".to_string()));
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{AsyncPipeBuilder, BuildError, PipeBuilder};
pub use crate::core::{
    async_step, bind, lift, sync_step, AsyncPipe, AsyncStep, Pipe, Step, StepOutcome,
};
