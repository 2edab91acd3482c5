//! This module handles conversion between JSON trees and the internal representations
//!
//! Decoding never relies on a generic deserializer filling the gaps: every field is read through an [`ObjectReader`] accessor,
//! which states which default applies when the field is absent (or `null`).
//!
//! Encoding always emits every field, in the order they are declared, so that the output is deterministic.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

mod error;
pub use error::{CodecError, ValueKind};
mod path;
pub use path::FieldPath;

use crate::{Event, EventList, Person, Reminder, TimePoint};

/// Types that can be built from a JSON tree
pub trait FromTree: Sized {
    /// Build an instance from the tree found at `path`.
    /// `path` is only used to report errors
    fn from_tree(value: &Value, path: &FieldPath) -> Result<Self, CodecError>;
}

/// Types that can be turned into a JSON tree.
///
/// This cannot fail, every in-memory value has a JSON representation
pub trait ToTree {
    fn to_tree(&self) -> Value;
}


/// Parse a JSON text and build an instance from it
pub fn from_str<T: FromTree>(text: &str) -> Result<T, CodecError> {
    let value: Value = serde_json::from_str(text)?;
    from_value(&value)
}

/// Build an instance from a document tree
pub fn from_value<T: FromTree>(value: &Value) -> Result<T, CodecError> {
    T::from_tree(value, &FieldPath::root())
}

pub fn to_value<T: ToTree>(item: &T) -> Value {
    item.to_tree()
}

/// Serialize into a compact JSON text
pub fn to_string<T: ToTree>(item: &T) -> String {
    item.to_tree().to_string()
}

/// Serialize into an indented JSON text
pub fn to_string_pretty<T: ToTree>(item: &T) -> String {
    format!("{:#}", item.to_tree())
}


/// Reads the declared fields of a JSON object, applying the documented default of each one.
///
/// A field that is absent and a field that is explicitly `null` are read the same way.
pub struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
    path: &'a FieldPath,
}

impl<'a> ObjectReader<'a> {
    /// Make sure `value` is an object.
    ///
    /// Fields that are not in `known_fields` are ignored (they are only logged)
    pub fn new(value: &'a Value, path: &'a FieldPath, known_fields: &[&str]) -> Result<Self, CodecError> {
        let fields = match value {
            Value::Object(fields) => fields,
            other if path.is_root() => {
                return Err(CodecError::MissingRequiredContainer { actual: ValueKind::of(other) });
            },
            other => {
                return Err(mismatch(path, ValueKind::Object, other));
            },
        };

        for key in fields.keys() {
            if known_fields.contains(&key.as_str()) == false {
                log::debug!("Ignoring unknown field `{}`", path.key(key));
            }
        }

        Ok(Self { fields, path })
    }

    /// Returns the value of a field, unless it is absent or `null`
    fn present(&self, key: &str) -> Option<&'a Value> {
        match self.fields.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    /// A string field. Defaults to an empty string
    pub fn string(&self, key: &str) -> Result<String, CodecError> {
        Ok(self.optional_string(key)?.unwrap_or_default())
    }

    /// A string field that may be missing. An empty string is kept as `Some("")`
    pub fn optional_string(&self, key: &str) -> Result<Option<String>, CodecError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(mismatch(&self.path.key(key), ValueKind::String, other)),
        }
    }

    /// An integer field. Defaults to `0`
    pub fn integer(&self, key: &str) -> Result<i64, CodecError> {
        match self.present(key) {
            None => Ok(0),
            Some(value) => value.as_i64()
                .ok_or_else(|| mismatch(&self.path.key(key), ValueKind::Integer, value)),
        }
    }

    /// A nested object field. Defaults to `T::default()`
    pub fn nested<T: FromTree + Default>(&self, key: &str) -> Result<T, CodecError> {
        match self.present(key) {
            None => Ok(T::default()),
            Some(value) => T::from_tree(value, &self.path.key(key)),
        }
    }

    /// An array field, decoded in document order. Defaults to an empty `Vec`.
    ///
    /// The first element that cannot be decoded makes the whole array fail
    pub fn sequence<T: FromTree>(&self, key: &str) -> Result<Vec<T>, CodecError> {
        let array_path = self.path.key(key);
        match self.present(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(elements)) => {
                elements.iter()
                    .enumerate()
                    .map(|(index, element)| T::from_tree(element, &array_path.index(index)))
                    .collect()
            },
            Some(other) => Err(mismatch(&array_path, ValueKind::Array, other)),
        }
    }
}

fn mismatch(path: &FieldPath, expected: ValueKind, actual: &Value) -> CodecError {
    CodecError::ShapeMismatch {
        field_path: path.to_string(),
        expected,
        actual: ValueKind::of(actual),
    }
}


/// Implements serde's traits on top of [`FromTree`] and [`ToTree`], so that serde users get the exact same rules
macro_rules! serde_through_tree {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    self.to_tree().serialize(serializer)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<$ty, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let value = Value::deserialize(deserializer)?;
                    <$ty>::from_tree(&value, &FieldPath::root()).map_err(serde::de::Error::custom)
                }
            }
        )*
    }
}

serde_through_tree!(Person, TimePoint, Reminder, Event, EventList);


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_absent() {
        let value = json!({ "a": null, "b": "text", "c": 12 });
        let path = FieldPath::root();
        let reader = ObjectReader::new(&value, &path, &["a", "b", "c"]).unwrap();

        assert_eq!(reader.string("a").unwrap(), "");
        assert_eq!(reader.optional_string("a").unwrap(), None);
        assert_eq!(reader.optional_string("missing").unwrap(), None);
        assert_eq!(reader.optional_string("b").unwrap(), Some("text".to_string()));
        assert_eq!(reader.integer("a").unwrap(), 0);
        assert_eq!(reader.integer("c").unwrap(), 12);
    }

    #[test]
    fn test_wrong_kinds() {
        let value = json!({ "s": 3, "i": 2.5, "arr": {} });
        let path = FieldPath::root().key("outer");
        let reader = ObjectReader::new(&value, &path, &[]).unwrap();

        match reader.string("s") {
            Err(CodecError::ShapeMismatch { field_path, expected, actual }) => {
                assert_eq!(field_path, "outer.s");
                assert_eq!(expected, ValueKind::String);
                assert_eq!(actual, ValueKind::Integer);
            },
            other => panic!("Unexpected result {:?}", other),
        }

        match reader.integer("i") {
            Err(CodecError::ShapeMismatch { expected, actual, .. }) => {
                assert_eq!(expected, ValueKind::Integer);
                assert_eq!(actual, ValueKind::Number);
            },
            other => panic!("Unexpected result {:?}", other),
        }

        let err = reader.sequence::<Person>("arr").unwrap_err();
        assert_eq!(err.field_path(), Some("outer.arr"));
    }

    #[test]
    fn test_containers() {
        let root = FieldPath::root();
        match ObjectReader::new(&json!([1, 2]), &root, &[]) {
            Err(CodecError::MissingRequiredContainer { actual }) => assert_eq!(actual, ValueKind::Array),
            _ => panic!("A top-level array must be rejected"),
        }

        let nested = root.key("creator");
        match ObjectReader::new(&json!("not-an-object"), &nested, &[]) {
            Err(err) => assert_eq!(err.field_path(), Some("creator")),
            Ok(_) => panic!("A nested string must be rejected"),
        }
    }

    #[test]
    fn test_invalid_text() {
        let result: Result<EventList, _> = from_str("{ not json");
        assert!(matches!(result, Err(CodecError::Json(_))));
    }
}
