use odu_core::rules::LookupRules;
use serde::{Deserialize, Serialize};

fn default_code() -> String {
    "kn".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LanguageConfig {
    #[serde(default = "default_code")]
    pub code: String,
    /// Replaces the language's built-in lookup policy when set
    pub rules: Option<LookupRules>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            code: default_code(),
            rules: None,
        }
    }
}
