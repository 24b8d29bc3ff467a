//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::state::AppState;
use crate::web::dto::HealthResponse;

/// Reports that the gateway is up.
///
/// The backend has no health endpoint in its contract, so it is not checked.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "backend": "http://api.example.com"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.backend_url.clone(),
    })
}
