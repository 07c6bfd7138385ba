use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;
use zidian_types::{Entry, SearchState};

use crate::api::{HttpLookupApi, LookupApi};
use crate::state::StateStore;

/// Shown to the user for every failed lookup, whatever the cause
pub const LOOKUP_FAILED_MESSAGE: &str =
    "We were unable to find the character you were looking for.";

/// Runs lookups and publishes their outcome.
///
/// Lookups are never coalesced or cancelled. When calls overlap, each one
/// publishes as its response arrives, so the last response to arrive wins
/// even if its request was sent first.
pub struct LookupService {
    api: Arc<dyn LookupApi>,
    state: StateStore,
}

impl LookupService {
    pub fn new(api: Arc<dyn LookupApi>) -> Self {
        Self {
            api,
            state: StateStore::new(),
        }
    }

    pub fn with_http(url: String) -> Self {
        Self::new(Arc::new(HttpLookupApi::new(url)))
    }

    pub fn state(&self) -> &StateStore {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> SearchState {
        self.state.current()
    }

    /// Look up `query` and publish the result. No validation is done here.
    pub async fn lookup(&self, query: &str) {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("lookup", %request_id, query);

        async {
            tracing::debug!("Sending lookup request");

            match self.api.lookup(query).await {
                Ok(entries) => {
                    let entries: Vec<Entry> =
                        entries.into_iter().map(Entry::with_thumbnail).collect();
                    tracing::info!("Received {} entries", entries.len());
                    self.state.publish(SearchState::success(entries));
                }
                Err(e) => {
                    tracing::error!("We received an error while retrieving the character: {e}");
                    self.state.publish(SearchState::failure(LOOKUP_FAILED_MESSAGE));
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Fire-and-forget lookup on the tokio runtime
    pub fn spawn_lookup(self: &Arc<Self>, query: String) -> JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move { service.lookup(&query).await })
    }
}
