// ── Reactive state stream ──
//
// Subscription type for observing `LoadState` transitions.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::loader::LoadState;

/// A subscription to a loader's state.
///
/// Provides both point-in-time snapshot access and reactive change
/// notification via [`changed()`](Self::changed), [`settled()`](Self::settled)
/// or by converting to a `Stream`.
pub struct StateStream {
    current: LoadState,
    receiver: watch::Receiver<LoadState>,
}

impl StateStream {
    pub(crate) fn new(receiver: watch::Receiver<LoadState>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The state captured at creation time or by the last
    /// `changed()` / `settled()` call.
    pub fn current(&self) -> &LoadState {
        &self.current
    }

    /// The latest state (may have changed since `current()` was captured).
    pub fn latest(&self) -> LoadState {
        self.receiver.borrow().clone()
    }

    /// Wait for the next transition, returning the new state.
    /// Returns `None` once the loader and all its in-flight fetches are gone.
    pub async fn changed(&mut self) -> Option<LoadState> {
        self.receiver.changed().await.ok()?;
        let state = self.receiver.borrow_and_update().clone();
        self.current = state.clone();
        Some(state)
    }

    /// Wait until the state is no longer `Loading`, returning it.
    ///
    /// Returns immediately if the latest state is already terminal.
    /// Returns `None` if the loader goes away while still `Loading`.
    pub async fn settled(&mut self) -> Option<LoadState> {
        let state = self
            .receiver
            .wait_for(|s| !s.is_loading())
            .await
            .ok()?
            .clone();
        self.current = state.clone();
        Some(state)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    ///
    /// The stream yields the current state first, then every transition.
    pub fn into_stream(self) -> StateWatchStream {
        StateWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct StateWatchStream {
    inner: WatchStream<LoadState>,
}

impl Stream for StateWatchStream {
    type Item = LoadState;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
