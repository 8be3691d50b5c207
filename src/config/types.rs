// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_DELAY_MS: u64 = 500;
pub const DEFAULT_MAX_VISIBLE: usize = 10;

/// Debounce configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DebounceConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        DebounceConfig {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl DebounceConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Suggestion list configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    /// Replaces the built-in suggestions when non-empty
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            max_visible: DEFAULT_MAX_VISIBLE,
            suggestions: Vec::new(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub debounce: DebounceConfig,
    #[serde(default)]
    pub list: ListConfig,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}
