//! Output formatting utilities.

use serde_json::Value;

/// Formats a canonical value as indented JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}
