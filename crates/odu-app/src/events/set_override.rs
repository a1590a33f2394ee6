use kanal::AsyncSender;
use odu_core::language::LanguageProcessor;
use odu_types::AppEvent;

use crate::state::AppState;

pub async fn handle_set_override(
    state: &AppState,
    word: &str,
    meaning: &str,
    app_to_output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let key = state.processor.normalize(word);
    let meaning = meaning.trim();

    state.processor.set_override(word, meaning);

    let message = if meaning.is_empty() {
        format!("Removed override for {}", key)
    } else {
        format!("Saved override: {} → {}", key, meaning)
    };
    tracing::info!("{}", message);
    app_to_output_tx.send(AppEvent::Output(message)).await?;

    Ok(())
}
