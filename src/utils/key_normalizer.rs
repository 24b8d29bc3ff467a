//! Turns whatever a user typed into a canonical short key.
//!
//! Accepted inputs:
//!
//! - a bare key: `abc123`
//! - a full short URL: `https://s.example.com/abc123`
//! - an "almost URL" that fails strict parsing: `s.example.com/abc123`
//!
//! Normalization never fails. An input that carries no key normalizes to the
//! empty key, which callers reject before talking to the backend.

use crate::domain::entities::NormalizedKey;
use percent_encoding::percent_decode_str;
use regex::Regex;
use url::Url;

/// Key normalizer bound to the public base URL of the short links.
#[derive(Debug, Clone)]
pub struct KeyNormalizer {
    base_url: String,
    base_prefix: Option<Regex>,
}

impl KeyNormalizer {
    /// Creates a normalizer for short links served under `base_url`.
    ///
    /// If `base_url` has no host, the "almost URL" prefix stripping is
    /// disabled and only strict URL parsing applies.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            base_prefix: base_prefix_pattern(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Normalizes `input` to its canonical key.
    ///
    /// Idempotent: `normalize(normalize(x)) == normalize(x)`.
    pub fn normalize(&self, input: &str) -> NormalizedKey {
        let mut current = self.normalize_once(input);

        // A pass that changes its input always drops a scheme, a host prefix,
        // a separator or an escape, so the output shrinks until it settles.
        loop {
            let next = self.normalize_once(&current);
            if next == current {
                break;
            }
            current = next;
        }

        NormalizedKey::new_unchecked(current)
    }

    /// Builds the displayable short link for `key`.
    pub fn short_link(&self, key: &NormalizedKey) -> String {
        format!("{}/{}", self.base_url, key)
    }

    fn normalize_once(&self, input: &str) -> String {
        let trimmed = input.trim();

        if let Ok(url) = Url::parse(trimmed)
            && !url.cannot_be_a_base()
        {
            let path = percent_decode_str(url.path()).decode_utf8_lossy();
            return path.trim_start_matches('/').to_string();
        }

        let without_base = match &self.base_prefix {
            Some(pattern) => pattern.replace(trimmed, ""),
            None => trimmed.into(),
        };

        without_base.trim_start_matches('/').trim().to_string()
    }
}

/// Convenience wrapper for one-off normalization.
pub fn normalize_key(input: &str, base_url: &str) -> NormalizedKey {
    KeyNormalizer::new(base_url).normalize(input)
}

/// Builds `^(scheme:)?/*host(:port)?(/base-path)?/+`, case-insensitive.
fn base_prefix_pattern(base_url: &str) -> Option<Regex> {
    let base = Url::parse(base_url.trim()).ok()?;
    let host = base.host_str()?;

    let base_path = base.path().trim_matches('/');
    let path_pattern = if base_path.is_empty() {
        String::new()
    } else {
        format!("(?:/+{})?", regex::escape(base_path))
    };

    let pattern = format!(
        r"(?i)^(?:[a-z][a-z0-9+.\-]*:)?/*{}(?::\d+)?{}/+",
        regex::escape(host),
        path_pattern
    );

    Regex::new(&pattern).ok()
}
