//! Orchestration services for the application layer.

pub mod redirect_resolver;
pub mod request_slot;
pub mod session;

pub use redirect_resolver::{RedirectActivation, RedirectResolver};
pub use request_slot::RequestSlot;
pub use session::{ShortenerSession, Submission};
