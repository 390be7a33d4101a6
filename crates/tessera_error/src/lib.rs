//! Error types for the Tessera request-transformation pipeline.
//!
//! Errors carry their creation site (file and line) captured through
//! `#[track_caller]`, so a failure deep inside a middleware chain still
//! points at the stage that raised it.

mod middleware;

pub use middleware::{Capability, MiddlewareError, MiddlewareErrorKind, MiddlewareResult};
