//! Domain layer: data model and the ports the core talks through.
//!
//! # Architecture
//!
//! - [`entities`] - Keys, backend payloads and per-action request state
//! - [`ports`] - Backend and navigator traits
//! - [`lifecycle`] - Mount guard for the apply-if-still-mounted rule
//!
//! The domain layer has no dependency on `reqwest`, `axum` or any terminal
//! code. Orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod lifecycle;
pub mod ports;
