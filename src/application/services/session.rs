//! Request orchestration for the shorten, fetch and delete actions.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::request_slot::RequestSlot;
use crate::domain::entities::{
    Action, DeleteResult, FetchResult, NormalizedKey, RequestState, ShortenResult,
};
use crate::domain::lifecycle::MountGuard;
use crate::domain::ports::ShortenerBackend;
use crate::error::ClientError;
use crate::utils::key_normalizer::KeyNormalizer;

/// Outcome of one `submit_*` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    /// The slot was `Loading`; nothing happened.
    Ignored,
    /// The call finished and its terminal state is now visible.
    Applied(RequestState<T>),
    /// The call finished after the slot was reset or the session torn down;
    /// its result was dropped.
    Stale,
}

impl<T> Submission<T> {
    pub fn state(&self) -> Option<&RequestState<T>> {
        match self {
            Self::Applied(state) => Some(state),
            _ => None,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// State owned by one UI shell: three independent action slots plus the two
/// input fields they read from.
///
/// # Request Flow
///
/// 1. `submit_*` moves the action's slot to `Loading` (or is ignored if it
///    already is)
/// 2. Input is normalized; an empty URL or key fails locally with
///    [`ClientError::Validation`]
/// 3. The matching backend call runs to completion
/// 4. The result is applied if the slot was not reset and the session is
///    still mounted
///
/// A successful delete also clears a fetch result shown for the same key.
///
/// Slots are independent: a shorten in flight never blocks a fetch.
pub struct ShortenerSession<B: ShortenerBackend + ?Sized> {
    backend: Arc<B>,
    normalizer: KeyNormalizer,
    shorten: RequestSlot<ShortenResult>,
    fetch: RequestSlot<FetchResult>,
    delete: RequestSlot<DeleteResult>,
    long_url_input: watch::Sender<String>,
    key_input: watch::Sender<NormalizedKey>,
    mount: MountGuard,
}

impl<B: ShortenerBackend + ?Sized> ShortenerSession<B> {
    pub fn new(backend: Arc<B>, normalizer: KeyNormalizer) -> Self {
        let (long_url_input, _) = watch::channel(String::new());
        let (key_input, _) = watch::channel(NormalizedKey::default());

        Self {
            backend,
            normalizer,
            shorten: RequestSlot::new(Action::Shorten),
            fetch: RequestSlot::new(Action::Fetch),
            delete: RequestSlot::new(Action::Delete),
            long_url_input,
            key_input,
            mount: MountGuard::new(),
        }
    }

    pub fn normalize(&self, raw: &str) -> NormalizedKey {
        self.normalizer.normalize(raw)
    }

    // ── Input fields ────────────────────────────────────────────────────────

    /// Stores the long-URL field and clears the shorten result tied to the
    /// previous value.
    pub fn edit_long_url(&self, raw: &str) {
        self.long_url_input.send_replace(raw.to_string());
        self.shorten.reset();
    }

    /// Stores the normalized key in the key field and clears fetch and delete
    /// results tied to the previous value.
    ///
    /// A pasted full short URL is replaced by its extracted key.
    pub fn edit_key(&self, raw: &str) -> NormalizedKey {
        let key = self.normalizer.normalize(raw);
        self.key_input.send_replace(key.clone());
        self.fetch.reset();
        self.delete.reset();
        key
    }

    pub fn long_url_input(&self) -> String {
        self.long_url_input.borrow().clone()
    }

    pub fn key_input(&self) -> NormalizedKey {
        self.key_input.borrow().clone()
    }

    pub fn subscribe_key_input(&self) -> watch::Receiver<NormalizedKey> {
        self.key_input.subscribe()
    }

    // ── Actions ─────────────────────────────────────────────────────────────

    /// Requests a short key for `long_url`.
    pub async fn submit_shorten(&self, long_url: &str) -> Submission<ShortenResult> {
        self.run(&self.shorten, async {
            let long_url = long_url.trim();
            if long_url.is_empty() {
                return Err(ClientError::validation("Enter a URL to shorten"));
            }
            self.backend.shorten(long_url).await
        })
        .await
    }

    /// Resolves a key, or a full short URL, to its long URL.
    pub async fn submit_fetch(&self, key_or_url: &str) -> Submission<FetchResult> {
        self.run(&self.fetch, async {
            let key = self.checked_key(key_or_url)?;
            self.backend.fetch(&key).await
        })
        .await
    }

    /// Deletes the mapping of a key, or of a full short URL.
    pub async fn submit_delete(&self, key_or_url: &str) -> Submission<DeleteResult> {
        let submission = self
            .run(&self.delete, async {
                let key = self.checked_key(key_or_url)?;
                self.backend.remove(&key).await
            })
            .await;

        if let Submission::Applied(RequestState::Succeeded(deleted)) = &submission
            && self.fetch.clear_if(|fetched| fetched.key == deleted.key)
        {
            debug!("Cleared fetch result for deleted key {}", deleted.key);
        }

        submission
    }

    /// Submits the current content of the long-URL field.
    pub async fn submit_shorten_input(&self) -> Submission<ShortenResult> {
        let long_url = self.long_url_input();
        self.submit_shorten(&long_url).await
    }

    /// Submits the current content of the key field as a fetch.
    pub async fn submit_fetch_input(&self) -> Submission<FetchResult> {
        let key = self.key_input();
        self.submit_fetch(key.as_str()).await
    }

    /// Submits the current content of the key field as a delete.
    pub async fn submit_delete_input(&self) -> Submission<DeleteResult> {
        let key = self.key_input();
        self.submit_delete(key.as_str()).await
    }

    // ── Observation ─────────────────────────────────────────────────────────

    pub fn shorten_state(&self) -> RequestState<ShortenResult> {
        self.shorten.snapshot()
    }

    pub fn fetch_state(&self) -> RequestState<FetchResult> {
        self.fetch.snapshot()
    }

    pub fn delete_state(&self) -> RequestState<DeleteResult> {
        self.delete.snapshot()
    }

    pub fn subscribe_shorten(&self) -> watch::Receiver<RequestState<ShortenResult>> {
        self.shorten.subscribe()
    }

    pub fn subscribe_fetch(&self) -> watch::Receiver<RequestState<FetchResult>> {
        self.fetch.subscribe()
    }

    pub fn subscribe_delete(&self) -> watch::Receiver<RequestState<DeleteResult>> {
        self.delete.subscribe()
    }

    pub fn reset_shorten(&self) {
        self.shorten.reset();
    }

    pub fn reset_fetch(&self) {
        self.fetch.reset();
    }

    pub fn reset_delete(&self) {
        self.delete.reset();
    }

    // ── Lifecycle ───────────────────────────────────────────────────────────

    /// Marks the session as torn down. Calls in flight still complete but
    /// their results are never applied.
    pub fn teardown(&self) {
        debug!("Session torn down");
        self.mount.unmount();
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    fn checked_key(&self, key_or_url: &str) -> Result<NormalizedKey, ClientError> {
        let key = self.normalizer.normalize(key_or_url);
        if key.is_empty() {
            return Err(ClientError::validation("Enter a short key or short URL"));
        }
        Ok(key)
    }

    async fn run<T, Fut>(&self, slot: &RequestSlot<T>, call: Fut) -> Submission<T>
    where
        T: Clone,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let Some(ticket) = slot.try_begin() else {
            return Submission::Ignored;
        };

        let outcome = call.await;

        if !self.mount.is_mounted() {
            debug!(action = %slot.action(), "Session torn down, dropping result");
            return Submission::Stale;
        }

        match slot.complete(ticket, outcome) {
            Some(state) => Submission::Applied(state),
            None => Submission::Stale,
        }
    }
}
