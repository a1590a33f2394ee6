use odu_types::Token;
use unicode_normalization::char::is_combining_mark;
use unicode_segmentation::UnicodeSegmentation;

/// Splits a line into alternating word and non-word tokens.
///
/// Concatenating the token texts always reproduces the input, and two
/// neighbouring tokens never share the same `is_word` value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        let tokens = tokenize_by_boundaries(line);
        if !tokens.is_empty() {
            return tokens;
        }
        tokenize_by_class(line)
    }
}

/// UAX #29 word boundaries; everything between detected words becomes a gap
pub(crate) fn tokenize_by_boundaries(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for (start, segment) in line.split_word_bound_indices() {
        if !is_word_segment(segment) {
            continue;
        }

        if start > last {
            push_merged(&mut tokens, &line[last..start], false);
        }
        push_merged(&mut tokens, segment, true);
        last = start + segment.len();
    }

    if last < line.len() {
        push_merged(&mut tokens, &line[last..], false);
    }

    tokens
}

/// Per-grapheme classification, merged into maximal runs
pub(crate) fn tokenize_by_class(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for grapheme in line.graphemes(true) {
        let is_word = grapheme.chars().all(is_word_char);
        push_merged(&mut tokens, grapheme, is_word);
    }

    tokens
}

fn is_word_segment(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

/// Letters, combining marks and digits
fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || is_combining_mark(c) || c.is_numeric()
}

fn push_merged(tokens: &mut Vec<Token>, text: &str, is_word: bool) {
    match tokens.last_mut() {
        Some(last) if last.is_word == is_word => last.text.push_str(text),
        _ => tokens.push(Token {
            text: text.to_string(),
            is_word,
        }),
    }
}
