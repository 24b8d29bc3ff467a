//! Application layer services driving the backend on behalf of a UI shell.
//!
//! Services consume the [`ShortenerBackend`](crate::domain::ports::ShortenerBackend)
//! port and expose observable state to the excluded presentation layer.
//!
//! # Available Services
//!
//! - [`services::session::ShortenerSession`] - Shorten, fetch and delete actions
//! - [`services::redirect_resolver::RedirectResolver`] - Short-key path redirects

pub mod services;
