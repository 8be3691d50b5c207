//! Suggestion sources
//!
//! The list is fixed for the lifetime of the widget. It comes from a file
//! given on the command line, the config file, or the built-in list.

use std::fs;
use std::path::Path;

use crate::error::TypeaheadError;

pub const BUILTIN_SUGGESTIONS: [&str; 13] = [
    "Apple",
    "AppleDoe",
    "AppleDoe2",
    "AppleDoe3",
    "Banana",
    "Cherry",
    "Date",
    "Elderberry",
    "Fig John Doe",
    "Grape",
    "Honeydewgg",
    "Honeydew hello",
    "Honeydew john",
];

pub fn builtin() -> Vec<String> {
    BUILTIN_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// Pick the suggestion list: an explicit file wins over the config list,
/// which wins over the built-in list.
pub fn resolve(file: Option<&Path>, configured: &[String]) -> Result<Vec<String>, TypeaheadError> {
    if let Some(path) = file {
        return load_from_path(path);
    }

    if !configured.is_empty() {
        return Ok(configured.to_vec());
    }

    Ok(builtin())
}

/// Read suggestions from a `.json` array of strings, or one per line
pub fn load_from_path(path: &Path) -> Result<Vec<String>, TypeaheadError> {
    let content = fs::read_to_string(path).map_err(|source| TypeaheadError::ReadSuggestions {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let suggestions = if is_json {
        parse_json(&content).map_err(|source| TypeaheadError::InvalidSuggestions {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        parse_lines(&content)
    };

    if suggestions.is_empty() {
        return Err(TypeaheadError::EmptySuggestions(path.to_path_buf()));
    }

    log::debug!(
        "Loaded {} suggestions from {}",
        suggestions.len(),
        path.display()
    );
    Ok(suggestions)
}

pub fn parse_json(content: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(content)
}

/// One suggestion per non-blank line, surrounding whitespace trimmed
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "suggestions_tests.rs"]
mod suggestions_tests;
