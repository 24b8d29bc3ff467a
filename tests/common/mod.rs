#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use url_shortener_client::application::services::{RedirectResolver, ShortenerSession};
use url_shortener_client::domain::ports::ShortenerBackend;
use url_shortener_client::infrastructure::http::HttpBackend;
use url_shortener_client::state::AppState;
use url_shortener_client::utils::key_normalizer::KeyNormalizer;

/// How the fake backend spells the created short link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortUrlStyle {
    /// `{"short_url": "k1"}`
    BareKey,
    /// `{"short_url": "<public base>/k1"}`
    FullUrl,
    /// `{"shortUrl": "k1"}`
    Legacy,
}

#[derive(Clone)]
struct FakeState {
    links: Arc<Mutex<HashMap<String, String>>>,
    next_id: Arc<AtomicU64>,
    style: ShortUrlStyle,
    public_url: String,
}

/// In-process stand-in for the shortening backend.
pub struct FakeBackend {
    pub base_url: String,
    links: Arc<Mutex<HashMap<String, String>>>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        Self::start_with(ShortUrlStyle::BareKey).await
    }

    pub async fn start_with(style: ShortUrlStyle) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let links = Arc::new(Mutex::new(HashMap::new()));
        let state = FakeState {
            links: links.clone(),
            next_id: Arc::new(AtomicU64::new(1)),
            style,
            public_url: base_url.clone(),
        };

        let app = Router::new()
            .route("/shorten_url", post(shorten))
            .route("/fetch_url/{key}", get(fetch))
            .route("/delete_url/{key}", delete(remove))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, links }
    }

    pub fn insert(&self, key: &str, long_url: &str) {
        self.links
            .lock()
            .unwrap()
            .insert(key.to_string(), long_url.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.links.lock().unwrap().contains_key(key)
    }

    pub fn http_backend(&self) -> HttpBackend {
        HttpBackend::new(&self.base_url, KeyNormalizer::new(&self.base_url)).unwrap()
    }

    pub fn session(&self) -> ShortenerSession<HttpBackend> {
        ShortenerSession::new(
            Arc::new(self.http_backend()),
            KeyNormalizer::new(&self.base_url),
        )
    }

    pub fn app_state(&self, home_route: &str) -> AppState {
        let backend: Arc<dyn ShortenerBackend> = Arc::new(self.http_backend());
        let resolver =
            RedirectResolver::new(backend, KeyNormalizer::new(&self.base_url), home_route);
        AppState::new(Arc::new(resolver), &self.base_url, &self.base_url)
    }
}

/// Gateway state whose backend refuses every connection.
pub fn unreachable_app_state(home_route: &str) -> AppState {
    let base_url = "http://127.0.0.1:1";
    let backend: Arc<dyn ShortenerBackend> =
        Arc::new(HttpBackend::new(base_url, KeyNormalizer::new(base_url)).unwrap());
    let resolver = RedirectResolver::new(backend, KeyNormalizer::new(base_url), home_route);
    AppState::new(Arc::new(resolver), base_url, base_url)
}

#[derive(Deserialize)]
struct ShortenBody {
    #[serde(default)]
    long_url: String,
}

async fn shorten(State(state): State<FakeState>, Json(body): Json<ShortenBody>) -> Response {
    if body.long_url.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "long_url is required").into_response();
    }

    let key = format!("k{}", state.next_id.fetch_add(1, Ordering::SeqCst));
    state
        .links
        .lock()
        .unwrap()
        .insert(key.clone(), body.long_url);

    let body = match state.style {
        ShortUrlStyle::BareKey => json!({ "short_url": key }),
        ShortUrlStyle::FullUrl => json!({ "short_url": format!("{}/{}", state.public_url, key) }),
        ShortUrlStyle::Legacy => json!({ "shortUrl": key }),
    };

    (StatusCode::CREATED, Json(body)).into_response()
}

async fn fetch(State(state): State<FakeState>, Path(key): Path<String>) -> Response {
    match state.links.lock().unwrap().get(&key) {
        Some(long_url) => Json(json!({ "long_url": long_url })).into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

async fn remove(State(state): State<FakeState>, Path(key): Path<String>) -> Response {
    match state.links.lock().unwrap().remove(&key) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
