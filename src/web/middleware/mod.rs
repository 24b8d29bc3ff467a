//! Gateway middleware.

pub mod tracing;
