use std::sync::Arc;

use kanal::AsyncReceiver;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use zidian_core::SearchForm;

use crate::state::AppState;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// One line entered into the search form
    Submit(String),
    /// No more input will arrive
    InputClosed,
}

/// App's main loop.
///
/// Submissions start lookups without waiting for earlier ones, so
/// overlapping lookups race and the renderer shows whichever lands last.
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut form = SearchForm::new(state.service.clone());
    let mut pending: Vec<JoinHandle<()>> = Vec::new();

    tracing::debug!("Event loop waiting for input");
    loop {
        let event = tokio::select! {
            event = input_rx.recv() => event,
            _ = cancel.cancelled() => {
                tracing::info!("Event loop stopping");
                return Ok(());
            }
        };

        match event {
            Ok(AppEvent::Submit(text)) => {
                handle_submit(&state, &mut form, text, &mut pending);
            }
            Ok(AppEvent::InputClosed) => {
                tracing::debug!("Input closed");
                break;
            }
            Err(e) => {
                tracing::warn!("Input channel closed: {e}");
                break;
            }
        }
    }

    tracing::debug!("Waiting for {} pending lookups", pending.len());
    for handle in pending {
        if let Err(e) = handle.await {
            tracing::error!("Lookup task panicked: {e}");
        }
    }

    cancel.cancel();
    Ok(())
}

fn handle_submit(
    state: &AppState,
    form: &mut SearchForm,
    text: String,
    pending: &mut Vec<JoinHandle<()>>,
) {
    form.set_input(text);

    match form.submit_detached() {
        Ok(handle) => {
            pending.retain(|h| !h.is_finished());
            pending.push(handle);
        }
        Err(e) => state.renderer.print_validation(e),
    }
}
