use odu_core::rules::LookupRules;

/// Case and plural endings, most specific first.
///
/// Plural-plus-case forms come before the bare plural so that
/// ಮನೆಗಳನ್ನು yields ಮನೆ rather than ಮನೆಗಳನ್.
pub const SUFFIXES: &[&str] = &[
    "ಗಳನ್ನು", // plural accusative
    "ಗಳಲ್ಲಿ", // plural locative
    "ಗಳಿಂದ",  // plural ablative
    "ಗಳಿಗೆ",  // plural dative
    "ಗಳು",    // plural
    "ಗಳ",     // plural genitive
    "ನ್ನು",   // accusative
    "ಲ್ಲಿ",   // locative
    "ಿಂದ",    // ablative
    "ಕ್ಕೆ",   // dative after a
    "ಿಗೆ",    // dative after consonant stems
    "ಗೆ",     // dative
    "ದ",      // genitive
    "ೂ",      // inclusive "also"
];

/// Glides and the genitive ದ that join a stem to its ending (ಮನೆ + ಯ + ಲ್ಲಿ)
pub const LINKING_CHARS: &[&str] = &["ಯ", "ವ", "ದ"];

pub fn kannada_rules() -> LookupRules {
    LookupRules::with_inflections(SUFFIXES, LINKING_CHARS)
}
