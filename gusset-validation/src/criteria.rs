// Validation criteria

use crate::datetime;
use gusset_core::{Error, FieldValue};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Lexical form of a number: optional sign, digits, optional single decimal
// point, optional exponent. No whitespace, no hex.
static NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap());

/// A single validation rule applied to one field.
///
/// The set is closed; criterion names arriving as strings (configuration,
/// wire formats) go through [`FromStr`], where an unknown name fails with
/// [`Error::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    /// Key present with a non-null value.
    Exists,
    /// Exists, and the value is not the empty string. `0`, `false`, and
    /// `"0"` are all non-empty.
    NotEmpty,
    /// NotEmpty, and the value lexically represents a number.
    Numeric,
    /// NotEmpty, and the value does not lexically represent a number.
    NotNumeric,
    /// NotEmpty, and the value's string form parses as a calendar date.
    DateFormat,
}

impl Criterion {
    /// Constraint name used in failure records and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Criterion::Exists => "exists",
            Criterion::NotEmpty => "notEmpty",
            Criterion::Numeric => "numeric",
            Criterion::NotNumeric => "notNumeric",
            Criterion::DateFormat => "dateFormat",
        }
    }

    /// Evaluate this criterion against a field value (`None` means the key
    /// is absent from the body).
    pub fn evaluate(self, value: Option<&FieldValue>) -> bool {
        let Some(value) = value else {
            return false;
        };
        // A null value is as good as an absent key.
        if !value.is_present() {
            return false;
        }
        match self {
            Criterion::Exists => true,
            Criterion::NotEmpty => !value.is_empty(),
            Criterion::Numeric => !value.is_empty() && is_numeric(value),
            Criterion::NotNumeric => !value.is_empty() && !is_numeric(value),
            Criterion::DateFormat => {
                !value.is_empty() && datetime::parse_permissive(&value.to_string()).is_some()
            }
        }
    }
}

fn is_numeric(value: &FieldValue) -> bool {
    if value.is_number() {
        return true;
    }
    match value.as_str() {
        Some(s) => NUMERIC_REGEX.is_match(s),
        // Booleans are not numeric.
        None => false,
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Criterion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exists" => Ok(Criterion::Exists),
            "notEmpty" | "not_empty" => Ok(Criterion::NotEmpty),
            "numeric" => Ok(Criterion::Numeric),
            "notNumeric" | "not_numeric" => Ok(Criterion::NotNumeric),
            "dateFormat" | "date_format" => Ok(Criterion::DateFormat),
            other => Err(Error::InvalidArgument(other.to_string())),
        }
    }
}
