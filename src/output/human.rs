//! Human-readable output formatting

use serde_json::Value;

use crate::output::json::format_json;

/// Strings print raw; everything else prints as JSON.
pub fn format_human(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => format_json(value),
    }
}
