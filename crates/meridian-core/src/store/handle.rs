//! Shared, observable access to a [`TimeZoneState`].

use std::sync::Arc;

use tokio::sync::watch;

use super::TimeZoneState;

/// Cloneable handle to a lifecycle store.
///
/// Transitions are applied through [`StoreHandle::update`] or
/// [`StoreHandle::update_if`]; readers take a [`StoreHandle::snapshot`] or
/// [`StoreHandle::subscribe`] to be woken on every applied transition.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    tx: Arc<watch::Sender<TimeZoneState>>,
}

impl StoreHandle {
    /// Creates a handle around a fresh, idle state.
    pub fn new() -> Self {
        Self::from_state(TimeZoneState::new())
    }

    /// Creates a handle around an existing state.
    pub fn from_state(state: TimeZoneState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> TimeZoneState {
        self.tx.borrow().clone()
    }

    /// Reads the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&TimeZoneState) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Applies a transition and notifies subscribers.
    pub fn update<R: Default>(&self, f: impl FnOnce(&mut TimeZoneState) -> R) -> R {
        let mut result = R::default();
        self.tx.send_modify(|state| result = f(state));
        result
    }

    /// Applies a transition that may decline to change anything.
    ///
    /// Subscribers are only notified when `f` returns `true`.
    pub fn update_if(&self, f: impl FnOnce(&mut TimeZoneState) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }

    /// Receiver that observes every applied transition.
    pub fn subscribe(&self) -> watch::Receiver<TimeZoneState> {
        self.tx.subscribe()
    }
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new()
    }
}
