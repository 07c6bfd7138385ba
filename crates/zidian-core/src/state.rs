use tokio::sync::watch;
use zidian_types::SearchState;

/// Holder of the published search state.
///
/// Readers either take the current value or subscribe for changes. Dropping
/// a receiver is the unsubscribe; the store never tracks its readers.
pub struct StateStore {
    tx: watch::Sender<SearchState>,
}

impl StateStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SearchState::default());
        Self { tx }
    }

    pub fn current(&self) -> SearchState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Replace the whole state. Works with no subscribers.
    pub(crate) fn publish(&self, state: SearchState) {
        self.tx.send_replace(state);
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
