use serde::{Deserialize, Serialize};

use crate::scoring::DEFAULT_TOP_COUNT;

/// Optional settings read from config.yaml
///
/// Example YAML:
/// ```yaml
/// data_file: festival_data.json
/// top_count: 3
/// colors: true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the JSON data file (default: ./festival_data.json)
    #[serde(default)]
    pub data_file: Option<String>,

    /// How many performances the summary lists (default: 3)
    #[serde(default)]
    pub top_count: Option<usize>,

    /// Allow ANSI colors when stdout is a terminal (default: true)
    #[serde(default)]
    pub colors: Option<bool>,
}

impl Config {
    pub fn effective_top_count(&self) -> usize {
        self.top_count.unwrap_or(DEFAULT_TOP_COUNT)
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors.unwrap_or(true)
    }
}
