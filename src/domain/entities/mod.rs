//! Core data model of the client.
//!
//! All entities are ephemeral: created per user action, held by the action's
//! [`RequestState`] and dropped when the next action of the same kind starts.
//!
//! - [`NormalizedKey`] - Canonical short key
//! - [`ShortenResult`], [`FetchResult`], [`DeleteResult`] - Backend payloads
//! - [`RequestState`] - Lifecycle of one action slot

pub mod key;
pub mod request_state;
pub mod results;

pub use key::NormalizedKey;
pub use request_state::{Action, RequestState};
pub use results::{DeleteResult, FetchResult, ShortenResult};
