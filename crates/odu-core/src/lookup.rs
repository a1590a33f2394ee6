use std::sync::Arc;

use odu_types::{LookupPath, LookupResult};

use crate::dictionary::DictionaryStore;
use crate::overrides::OverrideStore;
use crate::preprocess::TextNormalizer;
use crate::rules::LookupRules;

/// Resolves raw words to meanings.
///
/// Strategies are tried in a fixed order and the first success wins:
/// user override, then every candidate key (direct, then suffix-stripped)
/// against the dictionary store, following at most one redirect per hit.
/// Resolution never fails; a word without a meaning yields `LookupPath::None`.
pub struct DictionaryResolver {
    store: Arc<dyn DictionaryStore>,
    overrides: Arc<OverrideStore>,
    rules: LookupRules,
    normalizer: TextNormalizer,
}

struct ResolvedMeaning {
    meaning: String,
    redirected: bool,
}

impl DictionaryResolver {
    pub fn new(
        store: Arc<dyn DictionaryStore>,
        overrides: Arc<OverrideStore>,
        rules: LookupRules,
    ) -> Self {
        Self {
            store,
            overrides,
            rules,
            normalizer: TextNormalizer::new(),
        }
    }

    pub fn resolve(&self, word: &str) -> LookupResult {
        let normalized_key = self.normalizer.normalize(word);

        if let Some(meaning) = self.overrides.lookup(&normalized_key) {
            tracing::debug!("'{}' resolved by override", normalized_key);
            return LookupResult {
                word: word.to_string(),
                matched_key: Some(normalized_key.clone()),
                normalized_key,
                meaning: Some(meaning),
                path: LookupPath::Override,
            };
        }

        for candidate in self.rules.candidate_keys(&normalized_key) {
            let Some(raw) = self.store.lookup(&candidate) else {
                continue;
            };
            let Some(resolved) = self.resolve_meaning(&candidate, &raw) else {
                tracing::trace!("Entry for '{}' has no usable meaning", candidate);
                continue;
            };

            let path = if resolved.redirected {
                LookupPath::Redirect
            } else if candidate == normalized_key {
                LookupPath::Direct
            } else {
                LookupPath::Suffix
            };
            tracing::debug!("'{}' resolved via '{}' ({})", normalized_key, candidate, path);

            return LookupResult {
                word: word.to_string(),
                normalized_key,
                matched_key: Some(candidate),
                meaning: Some(resolved.meaning),
                path,
            };
        }

        tracing::trace!("'{}' not found", normalized_key);
        LookupResult::not_found(word, normalized_key)
    }

    /// Resolved meaning alone, if any
    pub fn meaning(&self, word: &str) -> Option<String> {
        self.resolve(word).meaning
    }

    pub fn source_description(&self) -> &str {
        self.store.source_description()
    }

    pub fn overrides(&self) -> &Arc<OverrideStore> {
        &self.overrides
    }

    pub fn rules(&self) -> &LookupRules {
        &self.rules
    }

    fn resolve_meaning(&self, key: &str, raw: &str) -> Option<ResolvedMeaning> {
        let Some(target) = self.rules.redirect_target(raw) else {
            return self
                .rules
                .clean_meaning(key, raw)
                .map(|meaning| ResolvedMeaning {
                    meaning,
                    redirected: false,
                });
        };

        if target.is_empty() || target == key {
            tracing::debug!("Rejecting redirect from '{}' to '{}'", key, target);
            return None;
        }

        // One hop only: the target's value is cleaned, never followed again
        let target_raw = self.store.lookup(&target)?;
        self.rules
            .clean_meaning(&target, &target_raw)
            .map(|meaning| ResolvedMeaning {
                meaning,
                redirected: true,
            })
    }
}
