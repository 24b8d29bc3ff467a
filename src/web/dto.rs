//! Response bodies of the gateway.

use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Backend base URL the gateway resolves keys against.
    pub backend: String,
}
