use std::sync::Arc;

use odu_core::lookup::DictionaryResolver;
use odu_core::sentence::SentenceSegmenter;
use odu_core::tokenizer::Tokenizer;
use odu_types::{GlossToken, SentenceGlossResult};
use serde::{Deserialize, Serialize};

/// Word-by-word inline gloss built on the dictionary resolver
pub struct SentenceGlossTranslator {
    tokenizer: Tokenizer,
    segmenter: SentenceSegmenter,
    resolver: Arc<DictionaryResolver>,
}

/// One display unit of a glossed text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GlossBlock {
    Sentence(SentenceGlossResult),
    Blank,
}

/// Gloss of a whole multi-paragraph text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextGlossResult {
    pub blocks: Vec<GlossBlock>,
    pub word_count: usize,
    pub glossed_word_count: usize,
}

impl TextGlossResult {
    pub fn coverage(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.glossed_word_count as f64 / self.word_count as f64
    }

    pub fn sentences(&self) -> impl Iterator<Item = &SentenceGlossResult> {
        self.blocks.iter().filter_map(|block| match block {
            GlossBlock::Sentence(sentence) => Some(sentence),
            GlossBlock::Blank => None,
        })
    }
}

impl SentenceGlossTranslator {
    pub fn new(resolver: Arc<DictionaryResolver>) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            segmenter: SentenceSegmenter::new(),
            resolver,
        }
    }

    pub fn resolver(&self) -> &Arc<DictionaryResolver> {
        &self.resolver
    }

    /// Replace every resolvable word of `sentence` by its meaning.
    ///
    /// Gaps pass through untouched; unresolved words keep their source text.
    pub fn gloss(&self, sentence: &str) -> SentenceGlossResult {
        let mut tokens = Vec::new();
        let mut word_count = 0;
        let mut glossed_word_count = 0;

        for token in self.tokenizer.tokenize(sentence) {
            if !token.is_word {
                tokens.push(GlossToken {
                    source: token.text,
                    gloss: None,
                    is_word: false,
                });
                continue;
            }

            word_count += 1;
            let gloss = self
                .resolver
                .meaning(&token.text)
                .filter(|meaning| !meaning.is_empty());
            if gloss.is_some() {
                glossed_word_count += 1;
            }

            tokens.push(GlossToken {
                source: token.text,
                gloss,
                is_word: true,
            });
        }

        tracing::debug!(
            "Glossed {}/{} words of sentence",
            glossed_word_count,
            word_count
        );

        SentenceGlossResult {
            source: sentence.to_string(),
            tokens,
            word_count,
            glossed_word_count,
        }
    }

    /// Gloss each sentence of each paragraph, keeping blank paragraphs as markers
    pub fn gloss_text(&self, text: &str) -> TextGlossResult {
        let mut result = TextGlossResult::default();

        for block in self.segmenter.blocks(text) {
            if block.is_empty {
                result.blocks.push(GlossBlock::Blank);
                continue;
            }

            let sentence = self.gloss(&block.text);
            result.word_count += sentence.word_count;
            result.glossed_word_count += sentence.glossed_word_count;
            result.blocks.push(GlossBlock::Sentence(sentence));
        }

        result
    }
}
