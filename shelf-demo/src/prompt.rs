//! Browser-native confirm/alert

use shelf_common::Prompter;
use tracing::warn;

/// Blocking `window.confirm` / `window.alert`. Outside a browser every
/// confirmation is declined.
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
    fn confirm(&self, message: &str) -> bool {
        match web_sys::window() {
            Some(window) => window.confirm_with_message(message).unwrap_or(false),
            None => {
                warn!("No window available, declining: {message}");
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    warn!("Failed to show alert: {message}");
                }
            }
            None => warn!("No window available for alert: {message}"),
        }
    }
}
