use std::collections::HashMap;
use std::sync::Arc;

use odu_types::LookupPath;

use crate::lookup::DictionaryResolver;
use crate::overrides::OverrideStore;
use crate::rules::LookupRules;

fn store(entries: &[(&str, &str)]) -> Arc<HashMap<String, String>> {
    Arc::new(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn resolver(entries: &[(&str, &str)]) -> DictionaryResolver {
    resolver_with_overrides(entries, &[])
}

fn resolver_with_overrides(
    entries: &[(&str, &str)],
    overrides: &[(&str, &str)],
) -> DictionaryResolver {
    let overrides = OverrideStore::with_seed(
        None,
        None,
        overrides.iter().map(|(k, v)| (k.to_string(), v.to_string())),
    );
    DictionaryResolver::new(
        store(entries),
        Arc::new(overrides),
        LookupRules::with_inflections(&["ಗಳು", "ಲ್ಲಿ", "ಗೆ"], &["ಯ", "ದ"]),
    )
}

#[test]
fn test_direct_match_normalizes_input() {
    let resolver = resolver(&[("hello", "hi")]);

    for input in ["hello", "  hello  ", "\nhello\t", "HELLO", "HeLLo"] {
        let result = resolver.resolve(input);
        assert_eq!(result.path, LookupPath::Direct, "{:?}", input);
        assert_eq!(result.meaning.as_deref(), Some("hi"));
        assert_eq!(result.matched_key.as_deref(), Some("hello"));
        assert_eq!(result.normalized_key, "hello");
        assert_eq!(result.word, input);
    }
}

#[test]
fn test_override_takes_precedence() {
    let resolver = resolver_with_overrides(&[("ಮನೆ", "house")], &[("ಮನೆ", "home")]);

    let result = resolver.resolve(" ಮನೆ ");
    assert_eq!(result.path, LookupPath::Override);
    assert_eq!(result.meaning.as_deref(), Some("home"));
    assert_eq!(result.matched_key.as_deref(), Some("ಮನೆ"));
}

#[test]
fn test_override_set_at_runtime_wins() {
    let resolver = resolver(&[("ಮನೆ", "house")]);
    assert_eq!(resolver.resolve("ಮನೆ").path, LookupPath::Direct);

    resolver.overrides().set_override("ಮನೆ", "dwelling");
    let result = resolver.resolve("ಮನೆ");
    assert_eq!(result.path, LookupPath::Override);
    assert_eq!(result.meaning.as_deref(), Some("dwelling"));
}

#[test]
fn test_suffix_fallback() {
    let resolver = resolver(&[("ಮನೆ", "house")]);

    let result = resolver.resolve("ಮನೆಗಳು");
    assert_eq!(result.path, LookupPath::Suffix);
    assert_eq!(result.meaning.as_deref(), Some("house"));
    assert_eq!(result.matched_key.as_deref(), Some("ಮನೆ"));
    assert_eq!(result.normalized_key, "ಮನೆಗಳು");
}

#[test]
fn test_linking_character_layer() {
    let resolver = resolver(&[("ಮನೆ", "house"), ("ಪುಸ್ತಕ", "book")]);

    let result = resolver.resolve("ಮನೆಯಲ್ಲಿ");
    assert_eq!(result.path, LookupPath::Suffix);
    assert_eq!(result.matched_key.as_deref(), Some("ಮನೆ"));

    let result = resolver.resolve("ಪುಸ್ತಕದಲ್ಲಿ");
    assert_eq!(result.meaning.as_deref(), Some("book"));
}

#[test]
fn test_punctuation_stripped_key_counts_as_suffix() {
    let resolver = resolver(&[("ಮನೆ", "house")]);

    let result = resolver.resolve("ಮನೆ,");
    assert_eq!(result.path, LookupPath::Suffix);
    assert_eq!(result.matched_key.as_deref(), Some("ಮನೆ"));
    assert_eq!(result.normalized_key, "ಮನೆ,");
}

#[test]
fn test_redirect_resolves_one_hop() {
    let resolver = resolver(&[("a", "= b2."), ("b", "value")]);

    let result = resolver.resolve("a");
    assert_eq!(result.path, LookupPath::Redirect);
    assert_eq!(result.meaning.as_deref(), Some("value"));
    assert_eq!(result.matched_key.as_deref(), Some("a"));
}

#[test]
fn test_redirect_through_suffix_candidate_is_redirect() {
    let resolver = resolver(&[("ಮನೆ", "=ಗೃಹ"), ("ಗೃಹ", "house")]);

    let result = resolver.resolve("ಮನೆಗೆ");
    assert_eq!(result.path, LookupPath::Redirect);
    assert_eq!(result.meaning.as_deref(), Some("house"));
    assert_eq!(result.matched_key.as_deref(), Some("ಮನೆ"));
}

#[test]
fn test_self_redirect_is_rejected() {
    let resolver = resolver(&[("a", "= a1.")]);

    let result = resolver.resolve("a");
    assert_eq!(result.path, LookupPath::None);
    assert!(result.meaning.is_none());
    assert!(result.matched_key.is_none());
}

#[test]
fn test_redirect_to_missing_or_empty_target() {
    let resolver = resolver(&[("a", "= zzz"), ("b", "= .")]);
    assert_eq!(resolver.resolve("a").path, LookupPath::None);
    assert_eq!(resolver.resolve("b").path, LookupPath::None);
}

#[test]
fn test_second_hop_is_not_followed() {
    let resolver = resolver(&[("a", "= b"), ("b", "= c"), ("c", "value")]);

    let result = resolver.resolve("a");
    assert_eq!(result.path, LookupPath::Redirect);
    assert_eq!(result.meaning.as_deref(), Some("= c"));
}

#[test]
fn test_meaning_that_repeats_headword_is_rejected() {
    let resolver = resolver(&[("x", "x.")]);
    assert_eq!(resolver.resolve("x").path, LookupPath::None);

    let resolver = resolver_with_overrides(&[("x", "X")], &[]);
    assert_eq!(resolver.resolve("X").path, LookupPath::None);
}

#[test]
fn test_unusable_hit_falls_through_to_next_candidate() {
    let resolver = resolver(&[("ಮನೆಯ", "ಮನೆಯ."), ("ಮನೆ", "house")]);

    let result = resolver.resolve("ಮನೆಯಲ್ಲಿ");
    assert_eq!(result.path, LookupPath::Suffix);
    assert_eq!(result.matched_key.as_deref(), Some("ಮನೆ"));
    assert_eq!(result.meaning.as_deref(), Some("house"));
}

#[test]
fn test_direct_meaning_is_cleaned() {
    let resolver = resolver(&[("ಪದ", "  word. ")]);
    assert_eq!(resolver.meaning("ಪದ").as_deref(), Some("word"));
}

#[test]
fn test_missing_and_blank_words() {
    let resolver = resolver(&[("hello", "hi")]);

    for input in ["missing", "", "   ", "!!!"] {
        let result = resolver.resolve(input);
        assert_eq!(result.path, LookupPath::None, "{:?}", input);
        assert!(result.meaning.is_none());
        assert_eq!(result.word, input);
    }
    assert_eq!(resolver.resolve("   ").normalized_key, "");
}

#[test]
fn test_source_description_comes_from_store() {
    let resolver = resolver(&[]);
    assert_eq!(resolver.source_description(), "In-memory map");
}
