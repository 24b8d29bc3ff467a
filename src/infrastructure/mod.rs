//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`http`] - HTTP client for the shortening backend
//! - [`navigation`] - Navigator implementations for the terminal client

pub mod http;
pub mod navigation;
