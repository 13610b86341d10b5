//! Error types for nullable field decoding.

use std::borrow::Cow;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// A field value whose JSON type does not match the expected type.
///
/// Produced by a single field decode. The offending fragment is kept verbatim
/// so callers can report exactly what was received.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("type mismatch: expected {expected}, got {fragment}")]
pub struct TypeMismatch {
    /// Human-readable name of the expected JSON type.
    pub expected: Cow<'static, str>,
    /// The raw JSON fragment that failed to decode.
    pub fragment: String,
    /// Underlying parser message.
    pub reason: String,
}

impl TypeMismatch {
    /// Builds a mismatch from the expected type, fragment, and parser message.
    pub fn new(
        expected: impl Into<Cow<'static, str>>,
        fragment: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            expected: expected.into(),
            fragment: fragment.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by the structural object decoder.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The top-level value is not an object.
    #[error("expected a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    /// A registered field failed to decode.
    #[error("field `{field}`: {source}")]
    Field {
        field: String,
        #[source]
        source: TypeMismatch,
    },
}

impl DecodeError {
    /// Returns the type mismatch behind a field error, if any.
    pub fn as_type_mismatch(&self) -> Option<&TypeMismatch> {
        match self {
            DecodeError::Field { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Name of the field that failed, if the error is field-scoped.
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = TypeMismatch::new("number", "\"wat\"", "invalid type");
        assert_eq!(err.to_string(), "type mismatch: expected number, got \"wat\"");
    }

    #[test]
    fn test_field_error_accessors() {
        let err = DecodeError::Field {
            field: "value".to_string(),
            source: TypeMismatch::new("number", "{}", "invalid type"),
        };
        assert_eq!(err.field(), Some("value"));
        assert_eq!(err.as_type_mismatch().map(|m| m.fragment.as_str()), Some("{}"));
        assert_eq!(
            err.to_string(),
            "field `value`: type mismatch: expected number, got {}"
        );
    }

    #[test]
    fn test_not_an_object_has_no_field() {
        let err = DecodeError::NotAnObject { found: "array" };
        assert!(err.field().is_none());
        assert!(err.as_type_mismatch().is_none());
    }
}
