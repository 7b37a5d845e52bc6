//! Diff generation for audit logging
//!
//! Summarizes which top-level fields changed between two serialized receipts.

use serde_json::Value;

const MAX_STRING_CHARS: usize = 50;

/// Generate a human-readable diff between two JSON values
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            // Notes are multi-line; keep the summary on one line
            let flat = s.replace('\n', "\\n");
            if flat.chars().count() > MAX_STRING_CHARS {
                let head: String = flat.chars().take(MAX_STRING_CHARS - 3).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", flat)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_change() {
        let before = json!({"id": "k3j9x0a1b", "title": "X", "note": ""});
        let after = json!({"id": "k3j9x0a1b", "title": "Y", "note": ""});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "title: \"X\" -> \"Y\"");
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"title": "Same", "note": "Same"});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"title": "T", "old": 1});
        let after = json!({"title": "T", "new": true});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: 1 -> (removed)"));
        assert!(diff.contains("new: (added) -> true"));
    }

    #[test]
    fn test_multiline_note_flattened() {
        let before = json!({"note": "Milk"});
        let after = json!({"note": "Milk\nEggs"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("\"Milk\\nEggs\""));
    }

    #[test]
    fn test_long_cyrillic_string_truncation() {
        let long = "ж".repeat(100);
        let before = json!({"note": long});
        let after = json!({"note": "коротко"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
        assert!(diff.contains("\"коротко\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("test")), "\"test\"");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
