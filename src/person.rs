//! People referenced by an event (creator, organizer)

use serde_json::{json, Value};

use crate::codec::{CodecError, FieldPath, FromTree, ObjectReader, ToTree};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Person {
    pub email: String,
    pub display_name: String,
}

impl Person {
    pub fn new(email: String, display_name: String) -> Self {
        Self { email, display_name }
    }
}

impl FromTree for Person {
    fn from_tree(value: &Value, path: &FieldPath) -> Result<Self, CodecError> {
        let reader = ObjectReader::new(value, path, &["email", "displayName"])?;
        Ok(Self {
            email: reader.string("email")?,
            display_name: reader.string("displayName")?,
        })
    }
}

impl ToTree for Person {
    fn to_tree(&self) -> Value {
        json!({
            "email": self.email,
            "displayName": self.display_name,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_person() {
        let person = Person::from_tree(&json!({ "email": "a@b.c" }), &FieldPath::root()).unwrap();
        assert_eq!(person, Person::new("a@b.c".to_string(), String::new()));

        assert_eq!(person.to_tree(), json!({ "email": "a@b.c", "displayName": "" }));
    }

    #[test]
    fn test_bad_email() {
        let path = FieldPath::root().key("creator");
        let err = Person::from_tree(&json!({ "email": ["a@b.c"] }), &path).unwrap_err();
        assert_eq!(err.field_path(), Some("creator.email"));
    }
}
