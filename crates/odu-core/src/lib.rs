pub mod dictionary;
pub mod error;
pub mod language;
pub mod lookup;
pub mod overrides;
pub mod preprocess;
pub mod rules;
pub mod sentence;
pub mod tokenizer;

pub use dictionary::{DictionaryLoader, DictionaryStore, LoadError};
pub use error::PersistError;
pub use lookup::DictionaryResolver;
pub use overrides::OverrideStore;
pub use preprocess::{Preprocessor, TextNormalizer};
pub use rules::LookupRules;
pub use sentence::SentenceSegmenter;
pub use tokenizer::Tokenizer;

#[cfg(test)]
mod tests;
