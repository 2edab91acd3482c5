use std::fmt::{Display, Formatter};

use serde_json::Value;
use thiserror::Error;

/// The structural kind of a JSON value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    /// A number that fits an `i64`
    Integer,
    /// Any other number
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(n) if n.is_i64() => ValueKind::Integer,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can happen when turning a JSON tree into the model
#[derive(Debug, Error)]
pub enum CodecError {
    /// A field holds a value of the wrong kind.
    /// `field_path` is the deepest path where the mismatch was found, e.g. `items[0].creator`
    #[error("shape mismatch at `{field_path}`: expected {expected}, found {actual}")]
    ShapeMismatch {
        field_path: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// The document itself is not an object
    #[error("expected a top-level object, found {actual}")]
    MissingRequiredContainer { actual: ValueKind },

    /// The input text is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// Returns the path of the offending field, if this error relates to a field
    pub fn field_path(&self) -> Option<&str> {
        match self {
            CodecError::ShapeMismatch { field_path, .. } => Some(field_path),
            _ => None,
        }
    }
}
