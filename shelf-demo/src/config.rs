//! Display config loaded from browser local storage

use crate::storage;
use shelf_common::ShelfConfig;
use tracing::{info, warn};

/// Local storage key holding the JSON config
pub const CONFIG_KEY: &str = "shelf.config";

/// Load the stored config, falling back to defaults when it is missing or
/// unreadable.
pub fn load() -> ShelfConfig {
    let Some(json) = storage::get_string(CONFIG_KEY) else {
        info!("No stored config, using defaults");
        return ShelfConfig::default();
    };

    match ShelfConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring invalid config in {CONFIG_KEY}: {e}");
            ShelfConfig::default()
        }
    }
}
