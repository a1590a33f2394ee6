use kanal::AsyncSender;
use odu_types::AppEvent;

use crate::render;
use crate::state::AppState;

pub async fn handle_lookup_word(
    state: &AppState,
    word: &str,
    app_to_output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let show_pronunciation = state.config.read().await.reader.show_pronunciation;

    let result = state.processor.lookup_recording(word);
    tracing::debug!("Lookup '{}' -> {}", word, result.path);

    let pronunciation = show_pronunciation.then(|| state.processor.pronounce(word));
    app_to_output_tx
        .send(AppEvent::Output(render::lookup_line(
            &result,
            pronunciation.as_deref(),
        )))
        .await?;

    Ok(())
}
