//! Handler for the home route.

use axum::extract::State;

use crate::state::AppState;

/// Landing text of the gateway. Failed redirects end up here.
///
/// # Endpoint
///
/// `GET /` (and `HOME_ROUTE` when it differs)
pub async fn home_handler(State(state): State<AppState>) -> String {
    format!(
        "URL Shortener\n\nOpen {}/<key> to follow a short link.\n",
        state.public_url.trim_end_matches('/')
    )
}
