//! Router of the redirect gateway.
//!
//! # Route Structure
//!
//! - `GET  /`        - Home route (also mounted at `HOME_ROUTE`)
//! - `GET  /health`  - Health check
//! - `GET  /{key}`   - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web::handlers::{health_handler, home_handler, redirect_handler};
use crate::web::middleware::tracing;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and middleware, without path normalization.
pub fn gateway_router(state: AppState) -> Router {
    let home_route = state.resolver.home_route().to_string();

    let mut router = Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler));

    // A home route served by `/{key}` would redirect to itself forever.
    if home_route != "/" {
        router = router.route(&home_route, get(home_handler));
    }

    router
        .route("/{key}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the gateway with trailing slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(gateway_router(state))
}
