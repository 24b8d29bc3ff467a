//! Resolution of a short-key path into a navigation.

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::domain::lifecycle::MountGuard;
use crate::domain::ports::{Navigation, Navigator, ShortenerBackend};
use crate::error::ClientError;
use crate::utils::key_normalizer::KeyNormalizer;

/// Resolves short keys for visitors entering through a short-key path.
///
/// Success leaves the application for the long URL. Every failure, including
/// an unknown key, falls back to the home route without an error page.
pub struct RedirectResolver<B: ShortenerBackend + ?Sized> {
    backend: Arc<B>,
    normalizer: KeyNormalizer,
    home_route: String,
}

impl<B: ShortenerBackend + ?Sized> RedirectResolver<B> {
    pub fn new(backend: Arc<B>, normalizer: KeyNormalizer, home_route: impl Into<String>) -> Self {
        Self {
            backend,
            normalizer,
            home_route: home_route.into(),
        }
    }

    pub fn home_route(&self) -> &str {
        &self.home_route
    }

    /// Normalizes `raw_key`, fetches it once and picks the navigation.
    ///
    /// Never retries. A long URL that is not an absolute http(s) URL counts
    /// as a failure so the visitor is never sent to an undefined location.
    pub async fn resolve(&self, raw_key: &str) -> Navigation {
        let key = self.normalizer.normalize(raw_key);
        if key.is_empty() {
            debug!("Empty short key {:?}, falling back home", raw_key);
            return self.home();
        }

        match self.backend.fetch(&key).await {
            Ok(result) => match external_target(&result.long_url) {
                Some(target) => {
                    info!("Redirecting {} to {}", key, target);
                    Navigation::External(target)
                }
                None => {
                    warn!("Key {} resolved to unusable URL {:?}", key, result.long_url);
                    self.home()
                }
            },
            Err(ClientError::NotFound { .. }) => {
                info!("Short key {} not found, falling back home", key);
                self.home()
            }
            Err(e) => {
                warn!("Failed to resolve short key {}: {}", key, e);
                self.home()
            }
        }
    }

    /// Starts a one-shot activation for a navigation to `raw_key`.
    pub fn activate(&self, raw_key: impl Into<String>) -> RedirectActivation<'_, B> {
        RedirectActivation {
            resolver: self,
            raw_key: raw_key.into(),
            mount: MountGuard::new(),
        }
    }

    fn home(&self) -> Navigation {
        Navigation::Home(self.home_route.clone())
    }
}

/// One entry through a short-key path.
///
/// [`run`](Self::run) consumes the activation, so it executes at most once.
/// Navigating to the same path again means creating a new activation.
pub struct RedirectActivation<'a, B: ShortenerBackend + ?Sized> {
    resolver: &'a RedirectResolver<B>,
    raw_key: String,
    mount: MountGuard,
}

impl<B: ShortenerBackend + ?Sized> RedirectActivation<'_, B> {
    pub fn raw_key(&self) -> &str {
        &self.raw_key
    }

    /// Handle the owning context uses to signal teardown.
    pub fn mount_guard(&self) -> MountGuard {
        self.mount.clone()
    }

    /// Resolves the key and hands the navigation to `navigator`.
    ///
    /// Returns `None` without navigating if the activation was torn down
    /// while the lookup was in flight.
    pub async fn run<N: Navigator + ?Sized>(self, navigator: &N) -> Option<Navigation> {
        let navigation = self.resolver.resolve(&self.raw_key).await;

        if !self.mount.is_mounted() {
            debug!("Activation for {:?} torn down, dropping {}", self.raw_key, navigation);
            return None;
        }

        navigator.navigate(&navigation);
        Some(navigation)
    }
}

fn external_target(long_url: &str) -> Option<String> {
    let trimmed = long_url.trim();
    let url = Url::parse(trimmed).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| trimmed.to_string())
}
