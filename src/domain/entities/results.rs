//! Payloads produced by successful backend calls.

use super::key::NormalizedKey;

/// Result of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub key: NormalizedKey,
    /// Displayable link, `<public base>/<key>`.
    pub short_url: String,
}

impl ShortenResult {
    pub fn new(key: NormalizedKey, short_url: String) -> Self {
        Self { key, short_url }
    }
}

/// Result of a successful fetch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Key the lookup was made for.
    pub key: NormalizedKey,
    pub long_url: String,
}

impl FetchResult {
    pub fn new(key: NormalizedKey, long_url: String) -> Self {
        Self { key, long_url }
    }
}

/// Acknowledgement of a successful delete call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub key: NormalizedKey,
}

impl DeleteResult {
    pub fn new(key: NormalizedKey) -> Self {
        Self { key }
    }
}
