//! Schema generation detection for decoded receipts.

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Resolved schema generation of a decoded receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaVersion {
    /// Chainpoint 1.0.
    V1_0,
    /// Chainpoint 1.1.
    V1_1,
    /// Chainpoint v2.
    V2 {
        /// Raw `type`/`@type` value carrying the embedded algorithm name,
        /// e.g. `"ChainpointSHA256v2"`.
        type_tag: String,
    },
}

/// Determines which schema generation a decoded receipt uses.
///
/// A `header` key always wins: when present the receipt is treated as
/// v1.x and `header.chainpoint_version` must be `"1.0"` or `"1.1"`, even
/// if a `type` key is also present. Without a header, the `type` key
/// (falling back to `@type`) must carry a tag matching
/// `Chainpoint<name>v2`, which resolves to v2.
pub fn detect(receipt: &Map<String, Value>) -> Result<SchemaVersion, ValidationError> {
    if let Some(header) = receipt.get("header") {
        let version = header
            .get("chainpoint_version")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ValidationError::Schema("cannot identify schema version".to_string())
            })?;
        return match version {
            "1.0" => Ok(SchemaVersion::V1_0),
            "1.1" => Ok(SchemaVersion::V1_1),
            other => Err(ValidationError::Schema(format!(
                "unsupported version '{other}'"
            ))),
        };
    }

    let type_tag = receipt
        .get("type")
        .or_else(|| receipt.get("@type"))
        .and_then(Value::as_str)
        .ok_or_else(|| ValidationError::Schema("cannot identify schema version".to_string()))?;

    if Regex::new("^Chainpoint.*v2$")
        .expect("invalid regex")
        .is_match(type_tag)
    {
        Ok(SchemaVersion::V2 {
            type_tag: type_tag.to_string(),
        })
    } else {
        Err(ValidationError::Schema(format!(
            "unrecognized type '{type_tag}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detect_value(value: Value) -> Result<SchemaVersion, ValidationError> {
        detect(value.as_object().unwrap())
    }

    #[test]
    fn header_resolves_v1_versions() {
        let v10 = json!({ "header": { "chainpoint_version": "1.0" } });
        let v11 = json!({ "header": { "chainpoint_version": "1.1" } });
        assert_eq!(detect_value(v10).unwrap(), SchemaVersion::V1_0);
        assert_eq!(detect_value(v11).unwrap(), SchemaVersion::V1_1);
    }

    #[test]
    fn header_takes_precedence_over_type() {
        let doc = json!({
            "header": { "chainpoint_version": "1.1" },
            "type": "ChainpointSHA256v2"
        });
        assert_eq!(detect_value(doc).unwrap(), SchemaVersion::V1_1);
    }

    #[test]
    fn type_tag_resolves_v2() {
        let doc = json!({ "type": "ChainpointSHA3-512v2" });
        assert_eq!(
            detect_value(doc).unwrap(),
            SchemaVersion::V2 {
                type_tag: "ChainpointSHA3-512v2".to_string()
            }
        );
    }

    #[test]
    fn at_type_is_a_fallback_for_type() {
        let doc = json!({ "@type": "ChainpointSHA256v2" });
        assert_eq!(
            detect_value(doc).unwrap(),
            SchemaVersion::V2 {
                type_tag: "ChainpointSHA256v2".to_string()
            }
        );
    }

    #[test]
    fn unknown_version_and_type_fail_with_schema_error() {
        for doc in [
            json!({}),
            json!({ "header": { "chainpoint_version": "3.0" } }),
            json!({ "header": {} }),
            json!({ "type": "ChainpointSHA256v3" }),
            json!({ "type": "OpenTimestamps" }),
            json!({ "type": 7 }),
        ] {
            assert!(matches!(detect_value(doc), Err(ValidationError::Schema(_))));
        }
    }
}
