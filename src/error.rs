//! Error taxonomy shared by the backend client, the request orchestrator and
//! the redirect resolver.
//!
//! Every failure ends up as one of four kinds. None of them is retried
//! automatically; the caller decides whether to submit again.

use std::fmt;

/// Failure of a single shorten, fetch or delete action.
///
/// The type is `Clone + PartialEq` because it is stored inside
/// [`RequestState::Failed`](crate::domain::entities::RequestState) and
/// published to observers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Input rejected locally, no backend call was made.
    #[error("{0}")]
    Validation(String),

    /// The backend confirmed that the key is unknown.
    #[error("Short key '{key}' not found")]
    NotFound { key: String },

    /// Transport failure: connection refused, DNS, TLS, timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// Any other non-success answer from the backend.
    #[error("Backend returned status {status}: {body}")]
    Backend { status: u16, body: String },
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn backend(status: u16, body: impl Into<String>) -> Self {
        Self::Backend {
            status,
            body: body.into(),
        }
    }

    /// Returns the kind used to pick the inline message shown to the user.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Network(_) => ErrorKind::Network,
            Self::Backend { .. } => ErrorKind::Backend,
        }
    }
}

/// Discriminant of [`ClientError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Network,
    Backend,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation_error",
            Self::NotFound => "not_found",
            Self::Network => "network_error",
            Self::Backend => "backend_error",
        }
    }

    /// Short message a UI renders next to the field that failed.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation => "Please check your input and try again.",
            Self::NotFound => "Not found",
            Self::Network => "Could not reach the shortening service.",
            Self::Backend => "The shortening service rejected the request.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
