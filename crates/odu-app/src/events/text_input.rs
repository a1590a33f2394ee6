use kanal::AsyncSender;
use odu_core::language::LanguageProcessor;
use odu_types::AppEvent;

use crate::render;
use crate::state::AppState;

pub async fn handle_text_input(
    state: &AppState,
    text: &str,
    app_to_output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (show_pronunciation, max_lookups) = {
        let config = state.config.read().await;
        (
            config.reader.show_pronunciation,
            config.reader.max_lookups_per_line,
        )
    };
    let processor = &state.processor;

    let gloss = processor.gloss_text(text);
    state
        .status
        .record_line(gloss.word_count, gloss.glossed_word_count);
    for line in render::gloss_lines(&gloss) {
        app_to_output_tx.send(AppEvent::Output(line)).await?;
    }

    let words = processor
        .tokenize(text)
        .into_iter()
        .filter(|token| token.is_word)
        .take(max_lookups);

    for word in words {
        let result = processor.lookup_recording(&word.text);
        let pronunciation = show_pronunciation.then(|| processor.pronounce(&word.text));
        let line = render::lookup_line(&result, pronunciation.as_deref());
        app_to_output_tx
            .send(AppEvent::Output(format!("  {}", line)))
            .await?;
    }

    Ok(())
}
