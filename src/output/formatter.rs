//! Output formatting

use serde_json::Value;

use crate::output::human::format_human;
use crate::output::json::format_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Render a looked-up value for printing.
pub fn format_output(value: &Value, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(value),
        OutputFormat::Json => format_json(value),
    }
}
