pub mod loader;
pub mod processor;
pub mod suffixes;
pub mod transliterator;

pub use loader::KannadaDictionaryLoader;
pub use processor::KannadaProcessor;
pub use suffixes::kannada_rules;
pub use transliterator::KannadaTransliterator;
