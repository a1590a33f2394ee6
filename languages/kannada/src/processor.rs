use std::sync::Arc;

use odu_config::Config;
use odu_core::dictionary::DictionaryStore;
use odu_core::language::{LanguageProcessor, Transliterator};
use odu_core::lookup::DictionaryResolver;
use odu_core::overrides::OverrideStore;
use odu_core::preprocess::TextNormalizer;
use odu_core::rules::LookupRules;
use odu_core::sentence::SentenceSegmenter;
use odu_core::tokenizer::Tokenizer;
use odu_translator::{SentenceGlossTranslator, TextGlossResult};
use odu_types::{LookupResult, SentenceBlock, SentenceGlossResult, Token};

use crate::loader::KannadaDictionaryLoader;
use crate::suffixes::kannada_rules;
use crate::transliterator::KannadaTransliterator;

/// Kannada language processor
pub struct KannadaProcessor {
    resolver: Arc<DictionaryResolver>,
    translator: SentenceGlossTranslator,
    tokenizer: Tokenizer,
    segmenter: SentenceSegmenter,
    normalizer: TextNormalizer,
    transliterator: KannadaTransliterator,
    record_missing: bool,
}

impl KannadaProcessor {
    /// Sample dictionary only, overrides kept in memory
    pub fn new() -> Self {
        let store = Arc::new(KannadaDictionaryLoader::load_fallback(&[]));
        Self::with_store(store, Arc::new(OverrideStore::in_memory()), kannada_rules())
    }

    /// Wire stores, overrides and rules from a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        let store = KannadaDictionaryLoader::build_store(&config.dictionary);
        let overrides = OverrideStore::new(
            config.dictionary.overrides_path.clone(),
            config.dictionary.missing_path.clone(),
        );
        let rules = config.language.rules.clone().unwrap_or_else(kannada_rules);

        let mut processor = Self::with_store(store, Arc::new(overrides), rules);
        processor.record_missing = config.reader.record_missing;
        processor
    }

    pub fn with_store(
        store: Arc<dyn DictionaryStore>,
        overrides: Arc<OverrideStore>,
        rules: LookupRules,
    ) -> Self {
        let resolver = Arc::new(DictionaryResolver::new(store, overrides, rules));
        Self {
            translator: SentenceGlossTranslator::new(resolver.clone()),
            resolver,
            tokenizer: Tokenizer::new(),
            segmenter: SentenceSegmenter::new(),
            normalizer: TextNormalizer::new(),
            transliterator: KannadaTransliterator::new(),
            record_missing: false,
        }
    }

    pub fn set_record_missing(&mut self, record_missing: bool) {
        self.record_missing = record_missing;
    }

    /// Resolve `word` and log it as missing when nothing matched
    pub fn lookup_recording(&self, word: &str) -> LookupResult {
        let result = self.resolver.resolve(word);
        if self.record_missing && !result.is_found() && !result.normalized_key.is_empty() {
            self.resolver.overrides().append_missing(&result.normalized_key);
        }
        result
    }

    pub fn gloss(&self, sentence: &str) -> SentenceGlossResult {
        self.translator.gloss(sentence)
    }

    pub fn gloss_text(&self, text: &str) -> TextGlossResult {
        self.translator.gloss_text(text)
    }

    pub fn blocks(&self, text: &str) -> Vec<SentenceBlock> {
        self.segmenter.blocks(text)
    }

    pub fn transliterate(&self, text: &str) -> String {
        self.transliterator.transliterate(text)
    }

    pub fn pronounce(&self, text: &str) -> String {
        self.transliterator.pronounce(text)
    }

    pub fn set_override(&self, word: &str, meaning: &str) {
        self.resolver.overrides().set_override(word, meaning);
    }

    pub fn ensure_overrides_file(&self) {
        self.resolver.overrides().ensure_overrides_file();
    }

    pub fn overrides(&self) -> &Arc<OverrideStore> {
        self.resolver.overrides()
    }

    pub fn source_description(&self) -> &str {
        self.resolver.source_description()
    }
}

impl Default for KannadaProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for KannadaProcessor {
    fn language_code(&self) -> &str {
        "kn"
    }

    fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    fn sentences(&self, text: &str) -> Vec<String> {
        self.segmenter.sentences(text)
    }

    fn lookup(&self, word: &str) -> LookupResult {
        self.resolver.resolve(word)
    }
}
