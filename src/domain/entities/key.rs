//! Canonical short key.

use std::fmt;

/// A short key in canonical form: no scheme, no host, no leading separator.
///
/// Only [`KeyNormalizer`](crate::utils::key_normalizer::KeyNormalizer) builds
/// values of this type, so holding one means the input already went through
/// normalization. The key may still be empty; callers reject empty keys
/// before dispatching a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    pub(crate) fn new_unchecked(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NormalizedKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NormalizedKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
