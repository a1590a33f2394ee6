pub trait Preprocessor {
    // Default lookup-key preprocessing
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Scripts without case pass through unchanged
        text.to_lowercase()
    }
}

/// Canonicalizes raw text into a dictionary lookup key
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl Preprocessor for TextNormalizer {}

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Trim surrounding whitespace (newlines and tabs included) and case-fold
    pub fn normalize(&self, text: &str) -> String {
        self.process(text)
    }
}
