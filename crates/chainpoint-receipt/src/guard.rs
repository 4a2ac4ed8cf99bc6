//! Field presence and hash-format guards shared by both schema generations.

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Returns a field's value, rejecting absent or falsy values.
///
/// A field counts as present when it holds an array (of any length,
/// including empty) or a truthy value. `null`, `false`, numeric zero, the
/// empty string, and the empty object all count as missing.
pub fn require<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    match object.get(field) {
        Some(value) if is_present(value) => Ok(value),
        _ => Err(ValidationError::MissingField { field }),
    }
}

/// Returns a field's value as a hex string of exactly `hex_len` characters.
///
/// Applies [`require`] first, then matches the value against
/// `^[A-Fa-f0-9]{hex_len}$`. Non-string values fail the format check.
pub fn require_hash<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
    hex_len: usize,
) -> Result<&'a str, ValidationError> {
    let value = require(object, field)?;
    let text = value.as_str().ok_or_else(|| ValidationError::InvalidFormat {
        field,
        value: value_text(value),
    })?;
    let pattern = format!("^[A-Fa-f0-9]{{{hex_len}}}$");
    if !Regex::new(&pattern).expect("invalid regex").is_match(text) {
        return Err(ValidationError::InvalidFormat {
            field,
            value: text.to_string(),
        });
    }
    Ok(text)
}

/// Renders a JSON value for error messages without quoting plain strings.
pub(crate) fn value_text(value: &Value) -> String {
    match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Array(_) => true,
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn require_rejects_falsy_values() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!({})] {
            let doc = object(json!({ "field": falsy }));
            assert!(matches!(
                require(&doc, "field"),
                Err(ValidationError::MissingField { field: "field" })
            ));
        }
    }

    #[test]
    fn require_rejects_absent_field() {
        let doc = object(json!({}));
        assert!(matches!(
            require(&doc, "field"),
            Err(ValidationError::MissingField { field: "field" })
        ));
    }

    #[test]
    fn require_accepts_empty_array_as_present() {
        let doc = object(json!({ "field": [] }));
        assert_eq!(require(&doc, "field").unwrap(), &json!([]));
    }

    #[test]
    fn require_accepts_truthy_values() {
        for truthy in [json!(true), json!(1), json!("x"), json!({"k": 1}), json!([1])] {
            let doc = object(json!({ "field": truthy.clone() }));
            assert_eq!(require(&doc, "field").unwrap(), &truthy);
        }
    }

    #[test]
    fn require_hash_accepts_exact_length_hex() {
        let hash = "Ab".repeat(32);
        let doc = object(json!({ "field": hash }));
        assert_eq!(require_hash(&doc, "field", 64).unwrap(), hash);
    }

    #[test]
    fn require_hash_rejects_wrong_length() {
        let doc = object(json!({ "field": "ab".repeat(31) }));
        assert!(matches!(
            require_hash(&doc, "field", 64),
            Err(ValidationError::InvalidFormat { field: "field", .. })
        ));
    }

    #[test]
    fn require_hash_rejects_non_hex_characters() {
        let doc = object(json!({ "field": "zz".repeat(32) }));
        assert!(matches!(
            require_hash(&doc, "field", 64),
            Err(ValidationError::InvalidFormat { field: "field", .. })
        ));
    }

    #[test]
    fn require_hash_rejects_non_string_value() {
        let doc = object(json!({ "field": 42 }));
        assert!(matches!(
            require_hash(&doc, "field", 64),
            Err(ValidationError::InvalidFormat { field: "field", .. })
        ));
    }
}
