use odu_types::{LookupResult, Token};

/// Text processing and lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "kn", "ta", "te", etc.)
    fn language_code(&self) -> &str;

    /// Canonical lookup key for a piece of text
    fn normalize(&self, text: &str) -> String;

    /// Break a line into word and non-word tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Break a paragraph into sentences
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Resolve a word to its best meaning
    fn lookup(&self, word: &str) -> LookupResult;
}

/// Optional trait for scripts with a romanized pronunciation guide
pub trait Transliterator: Send + Sync {
    /// Latin rendering with diacritics
    fn transliterate(&self, text: &str) -> String;

    /// Plain-ASCII-leaning pronunciation hint
    fn pronounce(&self, text: &str) -> String;
}
