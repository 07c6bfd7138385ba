use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::AsyncRead;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{AppEvent, event_loop};
use crate::io::input_io;
use crate::render::render_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(64),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks<R>(&self, input: R) -> JoinSet<anyhow::Result<()>>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let mut tasks = JoinSet::new();

        // Subscribe before any lookup can publish
        let state_rx = self.state.service.subscribe();
        self.state.renderer.show_prompt();

        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.input_to_app.1.clone(),
            self.cancel_token.clone(),
        ));

        tasks.spawn(render_loop(
            self.state.clone(),
            state_rx,
            self.cancel_token.clone(),
        ));

        tasks.spawn(input_io(
            input,
            self.channels.input_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    /// Resolves once the event loop has finished or shutdown was requested
    pub async fn stopped(&self) {
        self.cancel_token.cancelled().await;
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
