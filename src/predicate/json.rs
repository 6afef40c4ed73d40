//! Type predicates for JSON values

use serde_json::Value;

/// True for whole numbers, including floats with no fractional part.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use specimen::predicate::is_integer;
///
/// assert!(is_integer(&json!(42)));
/// assert!(is_integer(&json!(-3.0)));
/// assert!(!is_integer(&json!(1.5)));
/// assert!(!is_integer(&json!("1")));
/// ```
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64()
                || n.is_u64()
                || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}

/// True for any number.
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// True for strings.
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// True for `true` and `false`.
pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

/// True for `null`, which also stands for an absent field.
pub fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// True for arrays.
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// True for objects.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}
