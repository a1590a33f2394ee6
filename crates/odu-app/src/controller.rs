use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use odu_types::AppEvent;
use tokio::io::AsyncWrite;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::spawn_stdin_watcher;
use crate::state::AppState;
use crate::ui::output_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_output: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(64), // typed lines
            app_to_output: kanal::bounded_async(256), // one event per rendered line
        }
    }
}

/// Reader session controller for task spawning and lifecycle
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

    /// Sender feeding the event loop, for input sources other than stdin
    pub fn input_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.input_to_app.0.clone()
    }

    /// Event loop and output loop writing to `writer`
    pub fn spawn_tasks<W>(&self, writer: W) -> JoinSet<anyhow::Result<()>>
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.input_to_app.1.clone(),
            self.channels.app_to_output.0.clone(),
        ));

        // Output loop
        tasks.spawn(output_loop(
            self.channels.app_to_output.1.clone(),
            writer,
            self.cancel_token.child_token(),
        ));

        tasks
    }

    /// Start the stdin watcher thread
    pub fn spawn_stdin(&self) -> std::io::Result<()> {
        spawn_stdin_watcher(self.input_sender(), self.cancel_token.child_token())?;
        Ok(())
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
