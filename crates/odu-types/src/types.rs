use serde::{Deserialize, Serialize};

/// Events flowing between the stdin watcher, the reader event loop and the
/// terminal output task
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A line of free text to read through
    TextInput(String),
    /// Explicit single-word lookup
    LookupWord(String),
    SetOverride {
        word: String,
        meaning: String,
    },
    /// Input that could not be understood, echoed back as a hint
    Unrecognized(String),
    /// Rendered text for the terminal
    Output(String),
    Shutdown,
}

/// One segment of a tokenized line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub is_word: bool,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_word: true,
        }
    }

    pub fn gap(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_word: false,
        }
    }
}

/// Which strategy produced a lookup's meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupPath {
    Override,
    Direct,
    Suffix,
    Redirect,
    None,
}

impl LookupPath {
    /// Label shown next to a result for diagnostics
    pub fn display_name(&self) -> &'static str {
        match self {
            LookupPath::Override => "Override",
            LookupPath::Direct => "Direct",
            LookupPath::Suffix => "Suffix",
            LookupPath::Redirect => "Redirect",
            LookupPath::None => "None",
        }
    }
}

impl std::fmt::Display for LookupPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Outcome of resolving one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Word exactly as the caller passed it
    pub word: String,
    pub normalized_key: String,
    /// Candidate key that produced the meaning
    pub matched_key: Option<String>,
    pub meaning: Option<String>,
    pub path: LookupPath,
}

impl LookupResult {
    pub fn not_found(word: impl Into<String>, normalized_key: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            normalized_key: normalized_key.into(),
            matched_key: None,
            meaning: None,
            path: LookupPath::None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path != LookupPath::None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossToken {
    pub source: String,
    pub gloss: Option<String>,
    pub is_word: bool,
}

impl GlossToken {
    /// Gloss when one was found, the source text otherwise
    pub fn rendered(&self) -> &str {
        self.gloss.as_deref().unwrap_or(&self.source)
    }
}

/// Inline gloss of a sentence with coverage counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceGlossResult {
    pub source: String,
    pub tokens: Vec<GlossToken>,
    pub word_count: usize,
    pub glossed_word_count: usize,
}

impl SentenceGlossResult {
    /// Share of words that received a gloss, 0 for a sentence without words
    pub fn coverage(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.glossed_word_count as f64 / self.word_count as f64
    }

    /// Reconstructed gloss text. Glossed words replace their source entirely.
    pub fn text(&self) -> String {
        self.tokens.iter().map(GlossToken::rendered).collect()
    }
}

/// A display unit of a multi-paragraph text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceBlock {
    pub text: String,
    /// Marks a blank paragraph kept for spacing
    pub is_empty: bool,
}

impl SentenceBlock {
    pub fn sentence(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_empty: false,
        }
    }

    pub fn blank() -> Self {
        Self {
            text: String::new(),
            is_empty: true,
        }
    }
}
