//! Body validator
//!
//! [`BodyValidator`] wraps a decoded request body and offers criterion
//! checks, bulk checks, failure introspection, and typed getters. Getters
//! come in strict/lenient pairs: the strict form returns a field-level
//! [`Error`], the `_opt` form folds the same failure into `None`. Both
//! route through the tracked check path, so every failed extraction also
//! lands in the failure record.
//!
//! # Example
//!
//! ```
//! use gusset_validation::{BodyValidator, Criterion};
//! use serde_json::json;
//!
//! let mut validator = BodyValidator::from_json(json!({
//!     "title": "hello",
//!     "price": "27.5",
//! }))
//! .unwrap();
//!
//! assert!(validator.check_all(["title", "price"], Criterion::NotEmpty));
//! assert_eq!(validator.get_int("price").unwrap(), 27);
//! assert_eq!(validator.get_string_non_empty("title").unwrap(), "hello");
//!
//! assert!(validator.get_datetime_opt("missing").is_none());
//! assert_eq!(validator.failed_fields(), vec!["missing"]);
//! ```

use crate::{Criterion, FieldErrors, datetime};
use chrono::NaiveDateTime;
use gusset_core::{BodySource, Error, FieldValue, Number, ParsedBody};

/// Validates and extracts fields of a decoded request body.
///
/// One instance per logical request: the body is immutable after
/// construction, while tracked checks append to the instance-owned
/// failure record.
#[derive(Debug, Clone)]
pub struct BodyValidator {
    body: ParsedBody,
    errors: FieldErrors,
}

impl BodyValidator {
    /// Build a validator from anything that can supply a decoded body.
    ///
    /// Fails with [`Error::InvalidInput`] when the source has no body or
    /// the body is not a key/value map.
    pub fn from_source<S: BodySource>(source: &S) -> Result<Self, Error> {
        match source.parsed_body() {
            Some(body) => Self::from_json(body),
            None => {
                tracing::warn!("request carried no decoded body");
                Err(Error::InvalidInput)
            }
        }
    }

    /// Build a validator directly from a decoded body value.
    pub fn from_json(body: serde_json::Value) -> Result<Self, Error> {
        let body = ParsedBody::from_json(&body).map_err(|err| {
            tracing::warn!("rejected parsed body: not a key/value map");
            err
        })?;
        Ok(Self {
            body,
            errors: FieldErrors::new(),
        })
    }

    /// The wrapped body.
    pub fn body(&self) -> &ParsedBody {
        &self.body
    }

    /// The failure record accumulated so far.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Names of fields that failed a tracked check, in first-failure order.
    pub fn failed_fields(&self) -> Vec<&str> {
        self.errors.fields()
    }

    /// Reset the failure record, e.g. between validation rounds over the
    /// same instance.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Untracked probe: evaluate a criterion without touching the failure
    /// record.
    pub fn satisfies(&self, field: &str, criterion: Criterion) -> bool {
        criterion.evaluate(self.body.get(field))
    }

    /// Validate one field against a criterion, recording the failure.
    pub fn check(&mut self, field: &str, criterion: Criterion) -> bool {
        let passed = self.satisfies(field, criterion);
        if !passed {
            tracing::debug!(field, criterion = criterion.name(), "field failed validation");
            self.errors.record(field, criterion);
        }
        passed
    }

    /// Validate multiple fields against one criterion.
    ///
    /// Short-circuits on the first failing field (that failure is still
    /// recorded); fields after it are not evaluated.
    pub fn check_all<I, S>(&mut self, fields: I, criterion: Criterion) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for field in fields {
            if !self.check(field.as_ref(), criterion) {
                return false;
            }
        }
        true
    }

    // ========== Typed getters ==========

    /// Value of a single checkbox (`name=foo` present or not).
    ///
    /// Absence is the normal "unchecked" state, so this never returns an
    /// error; like every getter it still goes through the tracked check.
    pub fn get_checkbox(&mut self, field: &str) -> bool {
        self.check(field, Criterion::Exists)
    }

    /// A field parsed as a date-time.
    ///
    /// A missing or empty field fails with [`Error::MissingField`]; a
    /// present, non-empty value that does not parse fails with
    /// [`Error::InvalidFormat`] carrying the raw value.
    pub fn get_datetime(&mut self, field: &str) -> Result<NaiveDateTime, Error> {
        if !self.check(field, Criterion::NotEmpty) {
            return Err(Error::MissingField(field.to_string()));
        }
        let Some(value) = self.body.get(field) else {
            return Err(Error::MissingField(field.to_string()));
        };
        let raw = value.to_string();
        match datetime::parse_permissive(&raw) {
            Some(parsed) => Ok(parsed),
            None => {
                self.errors.record(field, Criterion::DateFormat);
                Err(Error::InvalidFormat {
                    field: field.to_string(),
                    value: raw,
                })
            }
        }
    }

    /// Lenient twin of [`get_datetime`](Self::get_datetime): failures
    /// become `None` (and are still recorded).
    pub fn get_datetime_opt(&mut self, field: &str) -> Option<NaiveDateTime> {
        self.get_datetime(field).ok()
    }

    /// A numeric field in its narrowest representation: integer-looking
    /// input yields [`Number::Int`], everything else [`Number::Float`].
    pub fn get_numeric(&mut self, field: &str) -> Result<Number, Error> {
        let value = self.checked_value(field, Criterion::Numeric, Error::NotNumeric)?;
        match value {
            FieldValue::Int(i) => Ok(Number::Int(*i)),
            FieldValue::Float(x) => Ok(Number::Float(*x)),
            other => Ok(parse_number(&other.to_string())),
        }
    }

    /// Lenient twin of [`get_numeric`](Self::get_numeric).
    pub fn get_numeric_opt(&mut self, field: &str) -> Option<Number> {
        self.get_numeric(field).ok()
    }

    /// A numeric field truncated toward zero: `"27.5"` → `27`.
    pub fn get_int(&mut self, field: &str) -> Result<i64, Error> {
        self.get_numeric(field).map(|number| number.trunc())
    }

    /// Lenient twin of [`get_int`](Self::get_int).
    pub fn get_int_opt(&mut self, field: &str) -> Option<i64> {
        self.get_int(field).ok()
    }

    /// A numeric field as a float.
    pub fn get_float(&mut self, field: &str) -> Result<f64, Error> {
        self.get_numeric(field).map(|number| number.as_f64())
    }

    /// Lenient twin of [`get_float`](Self::get_float).
    pub fn get_float_opt(&mut self, field: &str) -> Option<f64> {
        self.get_float(field).ok()
    }

    /// A field as its string representation. The empty string is a valid,
    /// successful result; only absence fails.
    pub fn get_string(&mut self, field: &str) -> Result<String, Error> {
        let value = self.checked_value(field, Criterion::Exists, Error::MissingField)?;
        Ok(value.to_string())
    }

    /// Lenient twin of [`get_string`](Self::get_string).
    pub fn get_string_opt(&mut self, field: &str) -> Option<String> {
        self.get_string(field).ok()
    }

    /// A field as a non-empty string.
    pub fn get_string_non_empty(&mut self, field: &str) -> Result<String, Error> {
        let value = self.checked_value(field, Criterion::NotEmpty, Error::MissingOrEmpty)?;
        Ok(value.to_string())
    }

    /// Lenient twin of [`get_string_non_empty`](Self::get_string_non_empty).
    pub fn get_string_non_empty_opt(&mut self, field: &str) -> Option<String> {
        self.get_string_non_empty(field).ok()
    }

    // Tracked check followed by value lookup; the failure constructor
    // decides the error kind.
    fn checked_value(
        &mut self,
        field: &str,
        criterion: Criterion,
        failure: fn(String) -> Error,
    ) -> Result<&FieldValue, Error> {
        if !self.check(field, criterion) {
            return Err(failure(field.to_string()));
        }
        self.body
            .get(field)
            .ok_or_else(|| failure(field.to_string()))
    }
}

// Narrowest parse of a lexically numeric string.
fn parse_number(raw: &str) -> Number {
    match raw.parse::<i64>() {
        Ok(int) => Number::Int(int),
        Err(_) => Number::Float(raw.parse::<f64>().unwrap_or(f64::NAN)),
    }
}
