//! Redirect gateway: the HTTP entry point for visitors following short links.
//!
//! # Structure
//!
//! - [`routes`] - Route table
//! - [`handlers`] - Home, health and redirect handlers
//! - [`middleware`] - Request tracing
//! - [`dto`] - Response bodies

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
