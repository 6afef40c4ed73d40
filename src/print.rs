//! Short, readable rendering of values for error messages
//!
//! Strings are quoted, arrays and objects show at most [`PRINT_LIMIT`]
//! elements followed by an ellipsis, everything else uses its usual
//! textual form.
//!
//! ```
//! use serde_json::json;
//! use specimen::print::render_value;
//!
//! assert_eq!(render_value(&json!("abc")), "\"abc\"");
//! assert_eq!(render_value(&json!([1, 2, 3, 4, 5])), "[1, 2, 3, ...]");
//! assert_eq!(render_value(&json!({ "a": 1 })), "{\"a\": 1}");
//! ```

use serde_json::Value;

use crate::PRINT_LIMIT;

/// Render a value the way it appears in validation messages.
pub fn render_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) => {
            out.push('[');
            for (idx, item) in items.iter().take(PRINT_LIMIT).enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            if items.len() > PRINT_LIMIT {
                out.push_str(", ...");
            }
            out.push(']');
        }
        Value::Object(fields) => {
            out.push('{');
            for (idx, (key, item)) in fields.iter().take(PRINT_LIMIT).enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_quoted(out, key);
                out.push_str(": ");
                write_value(out, item);
            }
            if fields.len() > PRINT_LIMIT {
                out.push_str(", ...");
            }
            out.push('}');
        }
        other => out.push_str(&other.to_string()),
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    out.push_str(s);
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(render_value(&json!(42)), "42");
        assert_eq!(render_value(&json!(-1.23)), "-1.23");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&Value::Null), "null");
    }

    #[test]
    fn test_strings_are_quoted_verbatim() {
        assert_eq!(render_value(&json!("hello")), "\"hello\"");
        assert_eq!(render_value(&json!("")), "\"\"");
    }

    #[test]
    fn test_short_array_is_not_truncated() {
        assert_eq!(render_value(&json!([1, "a", 3])), "[1, \"a\", 3]");
        assert_eq!(render_value(&json!([])), "[]");
    }

    #[test]
    fn test_long_array_is_truncated() {
        assert_eq!(render_value(&json!([1, 2, 3, 4])), "[1, 2, 3, ...]");
    }

    #[test]
    fn test_object_keeps_field_order_and_truncates() {
        let value = json!({ "z": 1, "a": "x", "m": null, "b": 2 });
        assert_eq!(render_value(&value), "{\"z\": 1, \"a\": \"x\", \"m\": null, ...}");
    }

    #[test]
    fn test_nested_values() {
        let value = json!({ "list": [[1, 2, 3, 4]] });
        assert_eq!(render_value(&value), "{\"list\": [[1, 2, 3, ...]]}");
    }
}
