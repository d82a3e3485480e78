//! Decoded request-body model
//!
//! Body decoding (JSON, form data) happens upstream and produces
//! dynamically typed scalars. This module models those values as a closed
//! sum type, the body itself as an immutable field map, and the boundary
//! to the request abstraction as the [`BodySource`] trait.
//!
//! # Example
//!
//! ```
//! use gusset_core::{FieldValue, ParsedBody};
//! use serde_json::json;
//!
//! let body = ParsedBody::from_json(&json!({ "age": 27, "name": "Ada" })).unwrap();
//! assert_eq!(body.get("age"), Some(&FieldValue::Int(27)));
//! assert!(body.get("missing").is_none());
//! ```

use crate::Error;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt;

// ========== Field values ==========

/// A single decoded body value.
///
/// `Null` covers JSON `null`, which every criterion treats the same as an
/// absent key. Composite JSON values (arrays, objects) are outside the
/// model; conversion keeps them as their compact JSON text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// Whether the value counts as present. `Null` does not.
    pub fn is_present(&self) -> bool {
        !matches!(self, FieldValue::Null)
    }

    /// Whether the value is the empty string. Nothing else is empty:
    /// `Int(0)`, `Bool(false)`, and `Str("0")` all count as non-empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Str(s) if s.is_empty())
    }

    /// Borrow the value as a string, when it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value is natively numeric (`Int` or `Float`).
    pub fn is_number(&self) -> bool {
        matches!(self, FieldValue::Int(_) | FieldValue::Float(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&JsonValue> for FieldValue {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => FieldValue::Null,
            JsonValue::Bool(b) => FieldValue::Bool(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => FieldValue::Str(s.clone()),
            // Arrays and objects are kept opaquely; nested validation is
            // out of scope.
            other => FieldValue::Str(other.to_string()),
        }
    }
}

// ========== Numbers ==========

/// A numeric field value in its narrowest representation.
///
/// The numeric getter returns `Int` for integer-looking input (`"25"`,
/// a JSON `36`) and `Float` otherwise (`"27.5"`, a JSON `1.22`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Whether this is the integer representation.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Integer value, truncated toward zero: `27.5` → `27`, `-27.5` → `-27`.
    pub fn trunc(&self) -> i64 {
        match self {
            Number::Int(i) => *i,
            Number::Float(x) => x.trunc() as i64,
        }
    }

    /// Floating-point value.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(x) => *x,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

// ========== Parsed body ==========

/// Immutable mapping from field name to decoded value.
///
/// Built once at validator construction; never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ParsedBody {
    fields: HashMap<String, FieldValue>,
}

impl ParsedBody {
    /// Build from a decoded body. Anything other than a JSON object is
    /// rejected with [`Error::InvalidInput`].
    pub fn from_json(value: &JsonValue) -> Result<Self, Error> {
        match value {
            JsonValue::Object(map) => Ok(map
                .iter()
                .map(|(name, value)| (name.clone(), FieldValue::from(value)))
                .collect()),
            _ => Err(Error::InvalidInput),
        }
    }

    /// Value of a field, `None` when the key is absent.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Whether the key is present at all (a `Null` value still counts here;
    /// use the `Exists` criterion for presence in the validation sense).
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the body has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for ParsedBody {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

// ========== Body source boundary ==========

/// Anything that can supply a decoded request body.
///
/// This is the seam to the request abstraction: implement it on your
/// request type and hand the request straight to the validator.
pub trait BodySource {
    /// The decoded body, or `None` when the request carried none.
    fn parsed_body(&self) -> Option<JsonValue>;
}

impl BodySource for JsonValue {
    fn parsed_body(&self) -> Option<JsonValue> {
        Some(self.clone())
    }
}

impl BodySource for Option<JsonValue> {
    fn parsed_body(&self) -> Option<JsonValue> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_from_json_scalars() {
        assert_eq!(FieldValue::from(&json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from(&json!(true)), FieldValue::Bool(true));
        assert_eq!(FieldValue::from(&json!(36)), FieldValue::Int(36));
        assert_eq!(FieldValue::from(&json!(1.22)), FieldValue::Float(1.22));
        assert_eq!(
            FieldValue::from(&json!("bytes")),
            FieldValue::Str("bytes".to_string())
        );
    }

    #[test]
    fn test_field_value_from_json_composites_stay_opaque() {
        assert_eq!(
            FieldValue::from(&json!([1, 2])),
            FieldValue::Str("[1,2]".to_string())
        );
    }

    #[test]
    fn test_emptiness_is_empty_string_only() {
        assert!(FieldValue::Str(String::new()).is_empty());
        assert!(!FieldValue::Str("0".to_string()).is_empty());
        assert!(!FieldValue::Int(0).is_empty());
        assert!(!FieldValue::Bool(false).is_empty());
        assert!(!FieldValue::Null.is_empty());
    }

    #[test]
    fn test_display_stringification() {
        assert_eq!(FieldValue::Str("lorem".to_string()).to_string(), "lorem");
        assert_eq!(FieldValue::Int(36).to_string(), "36");
        assert_eq!(FieldValue::Float(1.22).to_string(), "1.22");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(FieldValue::Null.to_string(), "");
    }

    #[test]
    fn test_number_truncates_toward_zero() {
        assert_eq!(Number::Float(27.5).trunc(), 27);
        assert_eq!(Number::Float(-27.5).trunc(), -27);
        assert_eq!(Number::Float(1.22).trunc(), 1);
        assert_eq!(Number::Int(36).trunc(), 36);
    }

    #[test]
    fn test_number_as_f64() {
        assert_eq!(Number::Int(25).as_f64(), 25.0);
        assert_eq!(Number::Float(27.5).as_f64(), 27.5);
    }

    #[test]
    fn test_parsed_body_requires_a_map() {
        assert!(ParsedBody::from_json(&json!({ "a": 1 })).is_ok());
        assert!(matches!(
            ParsedBody::from_json(&json!(null)),
            Err(Error::InvalidInput)
        ));
        assert!(matches!(
            ParsedBody::from_json(&json!("scalar")),
            Err(Error::InvalidInput)
        ));
        assert!(matches!(
            ParsedBody::from_json(&json!([1, 2, 3])),
            Err(Error::InvalidInput)
        ));
    }

    #[test]
    fn test_parsed_body_lookup() {
        let body = ParsedBody::from_json(&json!({ "a": "x", "b": null })).unwrap();
        assert_eq!(body.get("a"), Some(&FieldValue::Str("x".to_string())));
        assert_eq!(body.get("b"), Some(&FieldValue::Null));
        assert!(body.get("c").is_none());
        assert!(body.contains("b"));
        assert!(!body.contains("c"));
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_body_source_impls() {
        let value = json!({ "a": 1 });
        assert_eq!(value.parsed_body(), Some(value.clone()));
        assert_eq!(None::<JsonValue>.parsed_body(), None);
        assert_eq!(Some(value.clone()).parsed_body(), Some(value));
    }
}
