use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_max_lookups_per_line() -> usize {
    32
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ReaderConfig {
    /// Append unresolved words to the missing-word log
    #[serde(default = "default_true")]
    pub record_missing: bool,
    #[serde(default = "default_true")]
    pub show_pronunciation: bool,
    #[serde(default = "default_max_lookups_per_line")]
    pub max_lookups_per_line: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            record_missing: default_true(),
            show_pronunciation: default_true(),
            max_lookups_per_line: default_max_lookups_per_line(),
        }
    }
}
