//! HTTP client for the shortening backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::dto::{FetchResponse, ShortenRequest, ShortenResponse};
use crate::config::Config;
use crate::domain::entities::{DeleteResult, FetchResult, NormalizedKey, ShortenResult};
use crate::domain::ports::ShortenerBackend;
use crate::error::ClientError;
use crate::utils::key_normalizer::KeyNormalizer;

const SHORTEN_PATH: &str = "shorten_url";
const FETCH_PATH: &str = "fetch_url";
const DELETE_PATH: &str = "delete_url";

/// Typed wrapper over the backend endpoints.
///
/// | Operation | Endpoint                    |
/// |-----------|-----------------------------|
/// | shorten   | `POST /shorten_url`         |
/// | fetch     | `GET /fetch_url/{key}`      |
/// | remove    | `DELETE /delete_url/{key}`  |
///
/// Keys are appended as a single percent-encoded path segment.
pub struct HttpBackend {
    base_url: Url,
    client: Client,
    normalizer: KeyNormalizer,
}

impl HttpBackend {
    /// Creates a backend client with the transport's default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if `base_url` is not an absolute
    /// hierarchical URL.
    pub fn new(base_url: &str, normalizer: KeyNormalizer) -> Result<Self, ClientError> {
        Self::with_client(base_url, normalizer, Client::new())
    }

    /// Creates a backend client around an existing `reqwest` client.
    pub fn with_client(
        base_url: &str,
        normalizer: KeyNormalizer,
        client: Client,
    ) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url.trim()).map_err(|e| {
            ClientError::validation(format!("Invalid backend URL '{base_url}': {e}"))
        })?;

        if parsed.cannot_be_a_base() {
            return Err(ClientError::validation(format!(
                "Backend URL '{base_url}' cannot carry a path"
            )));
        }

        Ok(Self {
            base_url: parsed,
            client,
            normalizer,
        })
    }

    /// Creates a backend client from process configuration.
    ///
    /// A request timeout is only set when `HTTP_TIMEOUT_SECONDS` is configured.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {e}")))?;

        Self::with_client(
            &config.backend_url,
            KeyNormalizer::new(&config.public_url),
            client,
        )
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn normalizer(&self) -> &KeyNormalizer {
        &self.normalizer
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::validation("Backend URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl ShortenerBackend for HttpBackend {
    async fn shorten(&self, long_url: &str) -> Result<ShortenResult, ClientError> {
        let url = self.endpoint(&[SHORTEN_PATH])?;

        debug!("Shortening {} via {}", long_url, url);

        let response = self
            .client
            .post(url)
            .json(&ShortenRequest { long_url })
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        let status = response.status().as_u16();
        let body: ShortenResponse = response
            .json()
            .await
            .map_err(|e| ClientError::backend(status, format!("Invalid response body: {e}")))?;

        let short_url = body.into_short_url().ok_or_else(|| {
            ClientError::backend(status, "Response carries neither short_url nor shortUrl")
        })?;

        let key = self.normalizer.normalize(&short_url);
        if key.is_empty() {
            warn!("Backend returned short URL '{}' without a key", short_url);
            return Err(ClientError::backend(status, "Backend returned an empty short key"));
        }

        debug!("Shortened {} to key {}", long_url, key);
        let link = self.normalizer.short_link(&key);
        Ok(ShortenResult::new(key, link))
    }

    async fn fetch(&self, key: &NormalizedKey) -> Result<FetchResult, ClientError> {
        let url = self.endpoint(&[FETCH_PATH, key.as_str()])?;

        debug!("Fetching key {} via {}", key, url);

        let response = self.client.get(url).send().await.map_err(network_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Key {} not found", key);
            return Err(ClientError::not_found(key.as_str()));
        }

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        let status = response.status().as_u16();
        let body: FetchResponse = response
            .json()
            .await
            .map_err(|e| ClientError::backend(status, format!("Invalid response body: {e}")))?;

        Ok(FetchResult::new(key.clone(), body.long_url))
    }

    async fn remove(&self, key: &NormalizedKey) -> Result<DeleteResult, ClientError> {
        let url = self.endpoint(&[DELETE_PATH, key.as_str()])?;

        debug!("Deleting key {} via {}", key, url);

        let response = self.client.delete(url).send().await.map_err(network_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Key {} not found on delete", key);
            return Err(ClientError::not_found(key.as_str()));
        }

        if !response.status().is_success() {
            return Err(backend_error(response).await);
        }

        Ok(DeleteResult::new(key.clone()))
    }
}

fn network_error(e: reqwest::Error) -> ClientError {
    warn!("Backend request failed: {}", e);
    ClientError::Network(e.to_string())
}

async fn backend_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    warn!("Backend returned {}: {}", status, body);
    ClientError::backend(status, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(base, KeyNormalizer::new("http://s.example.com")).unwrap()
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let result = HttpBackend::new("not a url", KeyNormalizer::new("http://host"));
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[test]
    fn test_rejects_opaque_base_url() {
        let result = HttpBackend::new("mailto:x@y", KeyNormalizer::new("http://host"));
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[test]
    fn test_endpoint_on_root() {
        let url = backend("http://api.example.com").endpoint(&[SHORTEN_PATH]).unwrap();
        assert_eq!(url.as_str(), "http://api.example.com/shorten_url");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = backend("http://api.example.com/v1/")
            .endpoint(&[FETCH_PATH, "abc123"])
            .unwrap();
        assert_eq!(url.as_str(), "http://api.example.com/v1/fetch_url/abc123");
    }

    #[test]
    fn test_endpoint_encodes_key_as_one_segment() {
        let url = backend("http://api.example.com")
            .endpoint(&[DELETE_PATH, "a/b c"])
            .unwrap();
        assert_eq!(url.as_str(), "http://api.example.com/delete_url/a%2Fb%20c");
    }
}
