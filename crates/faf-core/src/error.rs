//! Error types for FAF Core
//!
//! Compilation is total over document *content*: unknown types, stray ignore
//! tokens and missing paths all degrade gracefully. The only failure is a caller
//! handing over something that is not a mapping at all.

use serde_json::Value;
use thiserror::Error;

/// Result type alias for FAF operations
pub type Result<T> = std::result::Result<T, FafError>;

/// Main error type for FAF operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FafError {
    /// Document root was not a mapping
    #[error("Invalid document: expected a mapping at the root, got {found}")]
    InvalidDocument {
        /// JSON kind of the value that was supplied
        found: &'static str,
    },
}

impl FafError {
    /// Build an `InvalidDocument` error describing the offending root value
    pub fn invalid_document(root: &Value) -> Self {
        Self::InvalidDocument {
            found: value_kind(root),
        }
    }
}

/// Human-readable kind of a JSON value, used in error messages
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_document_names_kind() {
        let err = FafError::invalid_document(&json!(["a", "b"]));
        assert_eq!(err, FafError::InvalidDocument { found: "sequence" });
        assert!(err.to_string().contains("got sequence"));
    }

    #[test]
    fn test_value_kind_scalars() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&json!(true)), "boolean");
        assert_eq!(value_kind(&json!(3)), "number");
        assert_eq!(value_kind(&json!("x")), "string");
        assert_eq!(value_kind(&json!({})), "mapping");
    }
}
