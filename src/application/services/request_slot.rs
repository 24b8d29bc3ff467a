//! One observable request slot per logical action.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use crate::domain::entities::{Action, RequestState};
use crate::error::ClientError;

/// Proof that a submission entered `Loading` in a given epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Holds the live [`RequestState`] of one action and publishes every change
/// through a `watch` channel.
///
/// - `Loading` is entered only from `Idle`, `Succeeded` or `Failed`; a begin
///   while `Loading` is refused, so one slot never has two calls in flight.
/// - [`reset`](Self::reset) bumps the epoch. A call that started in an older
///   epoch cannot apply its result anymore.
///
/// The epoch is only read and written inside `watch` modify closures, which
/// run under the channel's write lock.
pub struct RequestSlot<T> {
    action: Action,
    state: watch::Sender<RequestState<T>>,
    epoch: AtomicU64,
}

impl<T: Clone> RequestSlot<T> {
    pub fn new(action: Action) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            action,
            state,
            epoch: AtomicU64::new(0),
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> RequestState<T> {
        self.state.borrow().clone()
    }

    /// Moves the slot to `Loading`. Returns `None` if a call is already in flight.
    pub fn try_begin(&self) -> Option<Ticket> {
        let mut ticket = None;
        self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = RequestState::Loading;
            ticket = Some(Ticket(self.epoch.load(Ordering::Acquire)));
            true
        });

        match ticket {
            Some(_) => debug!(action = %self.action, "Request started"),
            None => debug!(action = %self.action, "Submission ignored, request in flight"),
        }

        ticket
    }

    /// Applies the outcome of the call started with `ticket`.
    ///
    /// Returns the new state, or `None` if the slot was reset since.
    pub fn complete(
        &self,
        ticket: Ticket,
        outcome: Result<T, ClientError>,
    ) -> Option<RequestState<T>> {
        let mut pending: RequestState<T> = outcome.into();
        let applied = self.state.send_if_modified(|state| {
            if self.epoch.load(Ordering::Acquire) != ticket.0 || !state.is_loading() {
                return false;
            }
            *state = std::mem::take(&mut pending);
            true
        });

        if !applied {
            debug!(action = %self.action, "Dropping result of a reset request");
            return None;
        }

        let state = self.snapshot();
        debug!(action = %self.action, state = state.label(), "Request finished");
        Some(state)
    }

    /// Returns to `Idle` from any state and discards the held payload.
    pub fn reset(&self) {
        self.state.send_modify(|state| {
            self.epoch.fetch_add(1, Ordering::AcqRel);
            *state = RequestState::Idle;
        });
    }

    /// Resets the slot if it holds a payload matching `predicate`.
    pub fn clear_if(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        self.state.send_if_modified(|state| {
            let matches = state.payload().is_some_and(predicate);
            if matches {
                *state = RequestState::Idle;
            }
            matches
        })
    }
}
