use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for typeahead
#[derive(Debug, Error)]
pub enum TypeaheadError {
    #[error("Could not read suggestion file {}: {source}", .path.display())]
    ReadSuggestions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid suggestion file {}: expected a JSON array of strings ({source})", .path.display())]
    InvalidSuggestions {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Suggestion file {} contains no suggestions", .0.display())]
    EmptySuggestions(PathBuf),

    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
