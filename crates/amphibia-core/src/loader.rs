// ── List loader ──
//
// Turns one asynchronous `Source::fetch_all` call into an observable
// Loading → Success | Error transition.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::CoreError;
use crate::model::Amphibian;
use crate::source::Source;
use crate::stream::StateStream;

// ── LoadState ────────────────────────────────────────────────────

/// Observable state of a [`ListLoader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    /// The full response, in server order.
    Success(Arc<Vec<Amphibian>>),
    /// The last fetch failed. The cause is not retained.
    Error,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// The loaded items, if the state is `Success`.
    pub fn items(&self) -> Option<&[Amphibian]> {
        match self {
            Self::Success(items) => Some(items.as_slice()),
            Self::Loading | Self::Error => None,
        }
    }
}

// ── ListLoader ───────────────────────────────────────────────────

/// Loads the amphibian list from a [`Source`] and exposes the outcome
/// as a [`LoadState`].
///
/// A loader starts fetching as soon as it is created. Loads are not
/// serialized: calling [`load()`](Self::load) while another fetch is in
/// flight starts a second fetch, and whichever completes last determines
/// the final state.
///
/// Dropping the loader (or calling [`close()`](Self::close)) cancels
/// in-flight fetches; a fetch that completes afterwards writes nothing.
pub struct ListLoader<S: Source> {
    source: Arc<S>,
    state: Arc<watch::Sender<LoadState>>,
    cancel: CancellationToken,
    attempts: AtomicU64,
}

impl<S: Source> ListLoader<S> {
    /// Create a loader and start the first load.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(source: S) -> Self {
        let loader = Self::idle(source);
        drop(loader.load());
        loader
    }

    /// Create a loader in the `Loading` state without starting a fetch.
    pub fn idle(source: S) -> Self {
        let (state, _) = watch::channel(LoadState::Loading);
        Self {
            source: Arc::new(source),
            state: Arc::new(state),
            cancel: CancellationToken::new(),
            attempts: AtomicU64::new(0),
        }
    }

    /// The source this loader fetches from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current state snapshot.
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> StateStream {
        StateStream::new(self.state.subscribe())
    }

    /// Set the state to `Loading` and start a fetch.
    ///
    /// The returned handle completes once the fetch's outcome has been
    /// applied (or discarded after [`close()`](Self::close)). Dropping it
    /// does not cancel the fetch.
    ///
    /// After [`close()`](Self::close) this is a no-op: the state is left
    /// as it was and no fetch starts.
    pub fn load(&self) -> JoinHandle<()> {
        if self.cancel.is_cancelled() {
            debug!("loader closed, ignoring load");
            return tokio::spawn(async {});
        }

        let attempt = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;
        self.state.send_replace(LoadState::Loading);
        debug!(attempt, "load started");

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            let next = match source.fetch_all(&cancel).await {
                Ok(items) => {
                    debug!(attempt, count = items.len(), "load succeeded");
                    LoadState::Success(Arc::new(items))
                }
                Err(CoreError::Cancelled) => {
                    debug!(attempt, "load cancelled");
                    return;
                }
                Err(e) => {
                    debug!(attempt, kind = ?e.kind(), error = %e, "load failed");
                    LoadState::Error
                }
            };

            if cancel.is_cancelled() {
                debug!(attempt, "loader closed, discarding result");
                return;
            }
            state.send_replace(next);
        })
    }

    /// Same as [`load()`](Self::load).
    pub fn retry(&self) -> JoinHandle<()> {
        self.load()
    }

    /// Cancel in-flight fetches and stop accepting their results.
    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl<S: Source> Drop for ListLoader<S> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
