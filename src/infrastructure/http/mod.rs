//! `reqwest` implementation of [`ShortenerBackend`](crate::domain::ports::ShortenerBackend).

pub mod dto;
mod http_backend;

pub use http_backend::HttpBackend;
