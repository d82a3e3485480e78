// Failure record for tracked checks

use crate::Criterion;
use std::fmt;

/// Record of fields that failed a tracked check.
///
/// Each field maps to the criterion it most recently failed; a repeated
/// failure overwrites the criterion but keeps the field's position, so
/// iteration order is the insertion order of first failures. The record is
/// never cleared implicitly; it accumulates for the validator's lifetime
/// unless [`FieldErrors::clear`] is called.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    entries: Vec<(String, Criterion)>,
}

impl FieldErrors {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure, overwriting any earlier criterion for the field.
    pub fn record(&mut self, field: &str, criterion: Criterion) {
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, existing)) => *existing = criterion,
            None => self.entries.push((field.to_string(), criterion)),
        }
    }

    /// The criterion a field most recently failed, if any.
    pub fn criterion_for(&self, field: &str) -> Option<Criterion> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, criterion)| *criterion)
    }

    /// Names of all failed fields, in first-failure order.
    pub fn fields(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Iterate over `(field, criterion)` pairs in first-failure order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Criterion)> {
        self.entries
            .iter()
            .map(|(name, criterion)| (name.as_str(), *criterion))
    }

    /// Check if there are any recorded failures.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of failed fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drop all recorded failures.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Convert to JSON representation.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.entries.iter().map(|(field, criterion)| {
                serde_json::json!({
                    "field": field,
                    "criterion": criterion.name(),
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, criterion) in &self.entries {
            writeln!(f, "{}: failed {}", field, criterion)?;
        }
        Ok(())
    }
}
