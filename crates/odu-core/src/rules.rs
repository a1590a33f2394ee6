use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_segmentation::UnicodeSegmentation;

use crate::preprocess::TextNormalizer;

fn default_min_base_graphemes() -> usize {
    2
}

fn default_redirect_marker() -> char {
    '='
}

fn default_true() -> bool {
    true
}

/// Language-specific lookup policy: inflection suffixes, redirect syntax and
/// meaning cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupRules {
    /// Inflectional endings, tried in order
    pub suffixes: Vec<String>,
    /// Characters joining a stem to its ending, stripped as a second layer
    pub linking_chars: Vec<String>,
    /// Shortest stem (in grapheme clusters) left after removing a suffix
    #[serde(default = "default_min_base_graphemes")]
    pub min_base_graphemes: usize,
    /// Leading character of a stored value pointing at another headword
    #[serde(default = "default_redirect_marker")]
    pub redirect_marker: char,
    /// Strip trailing sense numbers from redirect targets ("word2" -> "word")
    #[serde(default = "default_true")]
    pub strip_sense_digits: bool,
    #[serde(default = "default_true")]
    pub drop_trailing_period: bool,
}

impl Default for LookupRules {
    fn default() -> Self {
        Self {
            suffixes: vec![],
            linking_chars: vec![],
            min_base_graphemes: default_min_base_graphemes(),
            redirect_marker: default_redirect_marker(),
            strip_sense_digits: default_true(),
            drop_trailing_period: default_true(),
        }
    }
}

impl LookupRules {
    pub fn with_inflections(suffixes: &[&str], linking_chars: &[&str]) -> Self {
        Self {
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
            linking_chars: linking_chars.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Ordered, deduplicated keys to try against the dictionary store.
    ///
    /// The first candidate is the key without edge punctuation, followed by
    /// every suffix-stripped stem and, when a stem ends in a linking
    /// character, that stem without it.
    pub fn candidate_keys(&self, normalized_key: &str) -> Vec<String> {
        let mut candidates = Vec::new();
        let stripped = strip_edge_punctuation(normalized_key);
        push_unique(&mut candidates, stripped);

        for suffix in self.suffixes.iter().filter(|s| !s.is_empty()) {
            let Some(base) = stripped.strip_suffix(suffix.as_str()) else {
                continue;
            };
            if base.graphemes(true).count() < self.min_base_graphemes {
                continue;
            }
            push_unique(&mut candidates, base);

            let unlinked = self
                .linking_chars
                .iter()
                .filter(|link| !link.is_empty())
                .find_map(|link| base.strip_suffix(link.as_str()));
            if let Some(stem) = unlinked {
                push_unique(&mut candidates, stem);
            }
        }

        candidates
    }

    /// Normalized target key when `raw` is a redirect entry, `None` otherwise.
    ///
    /// The returned key may be empty; callers reject that as well as
    /// redirects pointing back at their own headword.
    pub fn redirect_target(&self, raw: &str) -> Option<String> {
        let target = raw.trim().strip_prefix(self.redirect_marker)?;
        let mut target = strip_edge_punctuation(target.trim());
        if self.strip_sense_digits {
            target = target.trim_end_matches(|c: char| c.is_ascii_digit());
        }
        Some(TextNormalizer::new().normalize(target))
    }

    /// Tidy a stored meaning for display.
    ///
    /// Returns `None` when nothing useful is left: an empty string, or a
    /// meaning that only repeats the headword `key`.
    pub fn clean_meaning(&self, key: &str, raw: &str) -> Option<String> {
        let mut meaning = raw.trim();
        if self.drop_trailing_period {
            if let Some(stripped) = meaning.strip_suffix('.') {
                meaning = stripped.trim_end();
            }
        }

        if meaning.is_empty() || meaning.to_lowercase() == key.to_lowercase() {
            return None;
        }
        Some(meaning.to_string())
    }
}

/// Anything that is not a letter, digit, combining mark or whitespace
pub fn is_edge_punctuation(c: char) -> bool {
    !(c.is_alphanumeric() || is_combining_mark(c) || c.is_whitespace())
}

pub fn strip_edge_punctuation(text: &str) -> &str {
    text.trim_matches(is_edge_punctuation)
}

fn push_unique(candidates: &mut Vec<String>, key: &str) {
    if key.is_empty() || candidates.iter().any(|c| c == key) {
        return;
    }
    candidates.push(key.to_string());
}
