//! Validation

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;
use thiserror::Error;

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name
    pub field: &'static str,

    /// Human readable message
    pub message: &'static str,
}

impl FieldViolation {
    /// Create a new field violation.
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One or more field violations found while validating a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", join(.violations))]
pub struct ValidationError {
    violations: SmallVec<[FieldViolation; 2]>,
}

impl ValidationError {
    /// Build a validation error from collected violations.
    ///
    /// Returns `None` when nothing was violated.
    pub fn from_violations(violations: SmallVec<[FieldViolation; 2]>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Return every violation, in the order they were found.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Return the message recorded for `field`, if it was violated.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.violations
            .iter()
            .find(|violation| violation.field == field)
            .map(|violation| violation.message)
    }
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn empty_violations_produce_no_error() {
        assert!(ValidationError::from_violations(SmallVec::new()).is_none());
    }

    #[test]
    fn display_lists_every_violation() {
        let error = ValidationError::from_violations(smallvec![
            FieldViolation::new("code", "Invalid product code"),
            FieldViolation::new("price", "Invalid product price"),
        ]);

        assert_eq!(
            error.map(|error| error.to_string()).as_deref(),
            Some("validation failed: code: Invalid product code, price: Invalid product price")
        );
    }

    #[test]
    fn message_for_looks_up_by_field() {
        let error = ValidationError::from_violations(smallvec![FieldViolation::new(
            "price",
            "Invalid product price"
        )]);

        assert_eq!(
            error.as_ref().and_then(|error| error.message_for("price")),
            Some("Invalid product price")
        );
        assert_eq!(error.and_then(|error| error.message_for("code")), None);
    }
}
