//! Shared state of the redirect gateway.

use std::sync::Arc;

use crate::application::services::RedirectResolver;
use crate::config::Config;
use crate::domain::ports::ShortenerBackend;
use crate::error::ClientError;
use crate::infrastructure::http::HttpBackend;
use crate::utils::key_normalizer::KeyNormalizer;

/// State injected into every gateway handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RedirectResolver<dyn ShortenerBackend>>,
    pub backend_url: String,
    pub public_url: String,
}

impl AppState {
    pub fn new(
        resolver: Arc<RedirectResolver<dyn ShortenerBackend>>,
        backend_url: impl Into<String>,
        public_url: impl Into<String>,
    ) -> Self {
        Self {
            resolver,
            backend_url: backend_url.into(),
            public_url: public_url.into(),
        }
    }

    /// Wires an [`HttpBackend`] and a resolver from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] if the backend URL is unusable.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let backend: Arc<dyn ShortenerBackend> = Arc::new(HttpBackend::from_config(config)?);
        let resolver = RedirectResolver::new(
            backend,
            KeyNormalizer::new(&config.public_url),
            config.home_route.clone(),
        );

        Ok(Self::new(
            Arc::new(resolver),
            config.backend_url.clone(),
            config.public_url.clone(),
        ))
    }
}
