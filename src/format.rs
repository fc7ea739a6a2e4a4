//! Display-text rendering for attribute values.

use crate::properties::AttrValue;

/// Marker rendered for absent values.
pub const NULL_TEXT: &str = "NULL";

/// Render an attribute value as display text.
///
/// Scalars render as their string form, absent scalars as [NULL_TEXT].
/// Repeating values render comma-joined, with [NULL_TEXT] substituted for
/// each absent entry.
pub fn format_value(value: &AttrValue) -> String {
    match value {
        AttrValue::Scalar(entry) => entry_text(entry.as_deref()).to_string(),
        AttrValue::Repeating(entries) => entries
            .iter()
            .map(|entry| entry_text(entry.as_deref()))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn entry_text(entry: Option<&str>) -> &str {
    entry.unwrap_or(NULL_TEXT)
}
