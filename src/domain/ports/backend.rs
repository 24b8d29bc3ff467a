//! Port to the URL-shortening backend.

use crate::domain::entities::{DeleteResult, FetchResult, NormalizedKey, ShortenResult};
use crate::error::ClientError;
use async_trait::async_trait;

/// The three backend operations, one per HTTP endpoint.
///
/// Implementations perform exactly one network call per method: no retries,
/// no caching, no timeout beyond what the transport is configured with.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpBackend`] - `reqwest` implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerBackend: Send + Sync {
    /// Requests a short key for `long_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] on transport failure and
    /// [`ClientError::Backend`] on a non-success status.
    async fn shorten(&self, long_url: &str) -> Result<ShortenResult, ClientError>;

    /// Resolves `key` to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when the backend answers 404,
    /// [`ClientError::Backend`] on other non-success statuses and
    /// [`ClientError::Network`] on transport failure.
    async fn fetch(&self, key: &NormalizedKey) -> Result<FetchResult, ClientError>;

    /// Deletes the mapping for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when the backend answers 404,
    /// otherwise the same errors as [`Self::fetch`].
    async fn remove(&self, key: &NormalizedKey) -> Result<DeleteResult, ClientError>;
}
