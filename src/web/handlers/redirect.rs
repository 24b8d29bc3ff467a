//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::ports::Navigation;
use crate::state::AppState;

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// # Request Flow
///
/// 1. Normalize the path segment
/// 2. Fetch the key from the backend, once
/// 3. Return 307 Temporary Redirect to the long URL
///
/// Any failure (unknown key, backend or network error) answers
/// 303 See Other to the home route. No error page is rendered.
///
/// The request is the activation: if the client goes away, the handler
/// future is dropped and no navigation is produced.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Response {
    state.resolver.resolve(&key).await.into_response()
}

impl IntoResponse for Navigation {
    fn into_response(self) -> Response {
        match self {
            Navigation::External(url) => Redirect::temporary(&url).into_response(),
            Navigation::Home(route) => Redirect::to(&route).into_response(),
        }
    }
}
