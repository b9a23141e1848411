//! Display configuration

use serde::{Deserialize, Serialize};

/// en-US `toLocaleString` layout, e.g. `10/18/2026, 3:04:05 PM`
pub const DEFAULT_SAVED_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// User-adjustable display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// chrono format string for the "Saved on" confirmation
    pub saved_timestamp_format: String,
    /// Tab key shown on startup
    pub initial_tab: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            saved_timestamp_format: DEFAULT_SAVED_TIMESTAMP_FORMAT.to_string(),
            initial_tab: "groups".to_string(),
        }
    }
}

impl ShelfConfig {
    /// Parse a stored JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ShelfConfig::from_json(r#"{"initial_tab": "books"}"#).unwrap();
        assert_eq!(config.initial_tab, "books");
        assert_eq!(config.saved_timestamp_format, DEFAULT_SAVED_TIMESTAMP_FORMAT);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ShelfConfig::from_json("not json").is_err());
    }
}
