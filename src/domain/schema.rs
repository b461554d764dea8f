//! Structural check for a parsed people document.
//!
//! A document is trusted only if it is an array of objects, each carrying a
//! string `surname`, a string `name` and a `birthday` array of strings. A
//! `zodiac`, when present, must be a string. Other keys are allowed.

use serde_json::Value;
use std::fmt;

const REQUIRED: [&str; 3] = ["surname", "name", "birthday"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Location of the offending value, e.g. `[2].birthday[1]`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Returns `true` when `document` conforms. On failure the first violation is
/// handed to `report` and `false` is returned.
pub fn validate(document: &Value, report: impl FnOnce(&SchemaViolation)) -> bool {
    match check(document) {
        Ok(()) => true,
        Err(violation) => {
            tracing::warn!("Schema violation: {}", violation);
            report(&violation);
            false
        }
    }
}

/// Same check as [`validate`], returning the first violation found.
pub fn check(document: &Value) -> Result<(), SchemaViolation> {
    let items = document
        .as_array()
        .ok_or_else(|| type_mismatch(String::new(), document, "array"))?;

    for (index, item) in items.iter().enumerate() {
        check_person(&format!("[{}]", index), item)?;
    }
    Ok(())
}

fn check_person(path: &str, item: &Value) -> Result<(), SchemaViolation> {
    let object = item
        .as_object()
        .ok_or_else(|| type_mismatch(path.to_string(), item, "object"))?;

    for key in REQUIRED {
        if !object.contains_key(key) {
            return Err(SchemaViolation {
                path: path.to_string(),
                message: format!("'{}' is a required property", key),
            });
        }
    }

    for key in ["surname", "name", "zodiac"] {
        if let Some(value) = object.get(key) {
            if !value.is_string() {
                return Err(type_mismatch(format!("{}.{}", path, key), value, "string"));
            }
        }
    }

    let birthday_path = format!("{}.birthday", path);
    let birthday = &object["birthday"];
    let tokens = birthday
        .as_array()
        .ok_or_else(|| type_mismatch(birthday_path.clone(), birthday, "array"))?;
    for (index, token) in tokens.iter().enumerate() {
        if !token.is_string() {
            return Err(type_mismatch(
                format!("{}[{}]", birthday_path, index),
                token,
                "string",
            ));
        }
    }

    Ok(())
}

fn type_mismatch(path: String, value: &Value, expected: &str) -> SchemaViolation {
    SchemaViolation {
        path,
        message: format!("{} is not of type '{}'", value, expected),
    }
}
