//! Interfaces the core depends on and the outer layers implement.
//!
//! - [`ShortenerBackend`] - The HTTP backend, implemented in
//!   `crate::infrastructure::http`
//! - [`Navigator`] - The navigation side effect of the redirect flow
//!
//! Mock implementations are generated with `mockall` for unit tests.

pub mod backend;
pub mod navigator;

pub use backend::ShortenerBackend;
pub use navigator::{Navigation, Navigator};

#[cfg(test)]
pub use backend::MockShortenerBackend;
#[cfg(test)]
pub use navigator::MockNavigator;
