pub mod gloss;

pub use gloss::{GlossBlock, SentenceGlossTranslator, TextGlossResult};
