use odu_types::SentenceBlock;
use unicode_segmentation::UnicodeSegmentation;

/// Splits a paragraph into trimmed, non-empty sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self
    }

    pub fn sentences(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let sentences: Vec<String> = text
            .split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect();

        if sentences.is_empty() {
            return vec![trimmed.to_string()];
        }

        sentences
    }

    /// Display blocks for a multi-paragraph text.
    ///
    /// Paragraphs are split on `\n` and segmented independently; a blank
    /// paragraph becomes a single empty marker block.
    pub fn blocks(&self, text: &str) -> Vec<SentenceBlock> {
        let mut blocks = Vec::new();

        for paragraph in text.split('\n') {
            if paragraph.trim().is_empty() {
                blocks.push(SentenceBlock::blank());
                continue;
            }

            let sentences = self.sentences(paragraph);
            if sentences.is_empty() {
                blocks.push(SentenceBlock::sentence(paragraph));
            } else {
                blocks.extend(sentences.into_iter().map(SentenceBlock::sentence));
            }
        }

        blocks
    }
}
