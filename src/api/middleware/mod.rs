//! HTTP middleware for request processing.
//!
//! Provides request tracing and per-request time limits.

pub mod timeout;
pub mod tracing;
