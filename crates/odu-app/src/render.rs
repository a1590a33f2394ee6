use odu_translator::TextGlossResult;
use odu_types::{LookupPath, LookupResult, SentenceGlossResult};

/// One line describing a lookup: word, meaning and the path that found it
pub fn lookup_line(result: &LookupResult, pronunciation: Option<&str>) -> String {
    let mut line = result.word.trim().to_string();

    if let Some(pronunciation) = pronunciation.filter(|p| !p.is_empty()) {
        line.push_str(&format!(" ({})", pronunciation));
    }

    match (&result.meaning, result.path) {
        (Some(meaning), LookupPath::Direct | LookupPath::Override) => {
            line.push_str(&format!(" → {} [{}]", meaning, result.path));
        }
        (Some(meaning), _) => {
            let via = result.matched_key.as_deref().unwrap_or_default();
            line.push_str(&format!(" → {} [{} via {}]", meaning, result.path, via));
        }
        (None, _) => line.push_str(" → ? [None]"),
    }

    line
}

pub fn sentence_line(sentence: &SentenceGlossResult) -> String {
    format!(
        "{}  ({}/{} words)",
        sentence.text(),
        sentence.glossed_word_count,
        sentence.word_count
    )
}

pub fn gloss_lines(result: &TextGlossResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .blocks
        .iter()
        .map(|block| match block {
            odu_translator::GlossBlock::Sentence(sentence) => sentence_line(sentence),
            odu_translator::GlossBlock::Blank => String::new(),
        })
        .collect();
    lines.push(format!("coverage: {:.0}%", result.coverage() * 100.0));
    lines
}
