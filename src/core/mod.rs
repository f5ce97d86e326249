//! Core pipeline composition types and logic.
//!
//! This module contains the pure functional core of the library:
//! - `StepOutcome` for uniform handling of ready and deferred results
//! - `Pipe` for synchronous composition
//! - `AsyncPipe` for composition with suspension between steps
//! - Railway helpers (`bind`, `lift`) for error-as-value pipelines
//!
//! Everything here is a thin, transparent fold: the composers add no
//! error recovery, logging, or retry semantics of their own.

mod async_pipe;
mod outcome;
mod pipe;
mod railway;

pub use async_pipe::{async_step, sync_step, AsyncPipe, AsyncStep};
pub use outcome::StepOutcome;
pub use pipe::{Pipe, Step};
pub use railway::{bind, lift};
