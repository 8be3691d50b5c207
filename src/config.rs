//! Configuration loading
//!
//! Reads `~/.config/typeahead/config.toml`. A missing file means defaults; an
//! unreadable or invalid file also means defaults, plus a warning for the UI.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, DebounceConfig, ListConfig};

use crate::error::TypeaheadError;

const CONFIG_DIR: &str = "typeahead";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning to show the user
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    let result = fs::read_to_string(path)
        .map_err(TypeaheadError::from)
        .and_then(|contents| parse_config(&contents));

    match result {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config {}: {}", path.display(), e)),
            }
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, TypeaheadError> {
    Ok(toml::from_str(content)?)
}
