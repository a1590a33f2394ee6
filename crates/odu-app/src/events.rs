use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use odu_types::AppEvent;

use crate::state::AppState;

pub mod lookup_word;
pub mod set_override;
pub mod text_input;

use lookup_word::handle_lookup_word;
use set_override::handle_set_override;
use text_input::handle_text_input;

const HELP: &str = "Commands: :lookup WORD, :set WORD MEANING, :quit. Any other line is glossed.";

/// Reader's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    input_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_output_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Reader ready, waiting for input");
    app_to_output_tx.send(AppEvent::Output(HELP.to_string())).await?;

    loop {
        let event = input_to_app_rx.recv().await?;
        tracing::debug!("Event received: {:?}", std::mem::discriminant(&event));

        if let AppEvent::Shutdown = event {
            tracing::info!("Reader session finished: {}", state.status.summary());
            app_to_output_tx
                .send(AppEvent::Output(state.status.summary()))
                .await?;
            app_to_output_tx.send(AppEvent::Shutdown).await?;
            return Ok(());
        }

        handle_events(&state, &app_to_output_tx, event).await?;
    }
}

async fn handle_events(
    state: &AppState,
    app_to_output_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TextInput(text) => {
            tracing::debug!("TextInput received: {} chars", text.chars().count());
            handle_text_input(state, &text, app_to_output_tx).await?;
        }
        AppEvent::LookupWord(word) => {
            handle_lookup_word(state, &word, app_to_output_tx).await?;
        }
        AppEvent::SetOverride { word, meaning } => {
            handle_set_override(state, &word, &meaning, app_to_output_tx).await?;
        }
        AppEvent::Unrecognized(input) => {
            app_to_output_tx
                .send(AppEvent::Output(format!("Unrecognized: {}. {}", input, HELP)))
                .await?;
        }
        AppEvent::Output(_) | AppEvent::Shutdown => {
            // Output-side events, nothing to do here
        }
    }

    Ok(())
}
