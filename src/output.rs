//! Output formatting for terminal display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::ObjectRecord;

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide the line-per-field dump shown
/// after each walkthrough step and by single-object CLI commands.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display, without a trailing
    /// newline.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for ObjectRecord {
    fn pretty_print(&self) -> String {
        let mut lines = vec![format!("ID: {}", self.id), format!("Name: {}", self.name)];

        if let Some(ref data) = self.data {
            lines.extend(data.iter().map(|(key, value)| format!("{key}: {value}")));
        }

        lines.join("\n")
    }
}

/// Render an optional timestamp, `-` when the server left it out.
pub fn format_timestamp(ts: Option<&DateTime<Utc>>) -> String {
    ts.map_or_else(
        || "-".to_string(),
        |t| t.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_pretty_print_format() {
        let object: ObjectRecord = serde_json::from_value(serde_json::json!({
            "id": "abc123",
            "name": "Apple MacBook Pro 16",
            "data": {
                "year": 2019,
                "price": 1849.99,
                "CPU model": "Intel Core i9",
                "Hard disk size": "1 TB"
            }
        }))
        .unwrap();

        assert_eq!(
            object.pretty_print(),
            "ID: abc123\n\
             Name: Apple MacBook Pro 16\n\
             CPU model: Intel Core i9\n\
             Hard disk size: 1 TB\n\
             price: 1849.99\n\
             year: 2019"
        );
    }

    #[test]
    fn test_pretty_print_without_data() {
        let object: ObjectRecord = serde_json::from_value(serde_json::json!({
            "id": "2",
            "name": "Apple iPhone 12 Mini, 256GB, Blue",
            "data": null
        }))
        .unwrap();

        assert_eq!(
            object.pretty_print(),
            "ID: 2\nName: Apple iPhone 12 Mini, 256GB, Blue"
        );
    }

    #[test]
    fn test_format_timestamp() {
        let ts: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(format_timestamp(Some(&ts)), "2024-01-01T00:00:00Z");

        let ts: DateTime<Utc> = "2024-11-20T10:15:30.123+00:00".parse().unwrap();
        assert_eq!(format_timestamp(Some(&ts)), "2024-11-20T10:15:30.123Z");

        assert_eq!(format_timestamp(None), "-");
    }
}
