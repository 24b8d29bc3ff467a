//! Utility functions.
//!
//! - [`key_normalizer`] - Short key extraction and canonicalization

pub mod key_normalizer;
