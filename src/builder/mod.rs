//! Builder API for ergonomic pipeline construction.
//!
//! This module provides fluent builders and macros for creating
//! pipelines with minimal boilerplate. Validation (the two-step minimum)
//! always happens in the checked constructors at build time.

pub mod async_pipe;
pub mod error;
pub mod macros;
pub mod pipe;

pub use async_pipe::AsyncPipeBuilder;
pub use error::BuildError;
pub use pipe::PipeBuilder;
