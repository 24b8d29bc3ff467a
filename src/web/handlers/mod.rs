//! HTTP request handlers of the redirect gateway.

pub mod health;
pub mod home;
pub mod redirect;

pub use health::health_handler;
pub use home::home_handler;
pub use redirect::redirect_handler;
