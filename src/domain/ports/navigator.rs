//! Port through which the redirect flow leaves the current context.

use std::fmt;

/// Where a redirect activation sends the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Full navigation away from the application to the resolved long URL.
    External(String),
    /// Fallback to the home route of the application.
    Home(String),
}

impl Navigation {
    pub fn target(&self) -> &str {
        match self {
            Self::External(url) | Self::Home(url) => url,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External(url) => write!(f, "external:{url}"),
            Self::Home(route) => write!(f, "home:{route}"),
        }
    }
}

/// Performs a navigation. This is the terminal side effect of a redirect.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, navigation: &Navigation);
}
