//! # URL Shortener Client
//!
//! Client core for a URL-shortening backend: it requests short keys for long
//! URLs, resolves keys back to their long URLs, deletes mappings, and
//! redirects visitors arriving at a short-key path.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Keys, results, request state and ports
//! - **Application Layer** ([`application`]) - Request orchestration and redirect resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` backend client, terminal navigator
//! - **Web Layer** ([`web`]) - Redirect gateway built on Axum
//!
//! ## Binaries
//!
//! - `url-shortener-client` - Redirect gateway (`GET /{key}`)
//! - `shortener` - Terminal client (`shorten`, `fetch`, `delete`, `open`, `normalize`)
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_BACKEND_URL="http://localhost:8080"
//!
//! # Shorten a URL
//! cargo run --bin shortener -- shorten https://example.com/some/long/path
//!
//! # Start the redirect gateway
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod web;

pub use error::ClientError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RedirectResolver, ShortenerSession, Submission};
    pub use crate::domain::entities::{
        DeleteResult, FetchResult, NormalizedKey, RequestState, ShortenResult,
    };
    pub use crate::domain::ports::{Navigation, Navigator, ShortenerBackend};
    pub use crate::error::{ClientError, ErrorKind};
    pub use crate::infrastructure::http::HttpBackend;
    pub use crate::utils::key_normalizer::{KeyNormalizer, normalize_key};
}
