//! Field-keyed validation errors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single failed check, keyed by the form field it belongs to.
///
/// Synthetic keys are used for errors that are not tied to one input:
/// `form` for summaries and gateway failures, `birthDate` for the
/// three-part date, `terms` for the terms checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Form-level error, rendered above the form rather than next to an input.
    pub fn form(message: impl Into<String>) -> Self {
        Self::new("form", message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// First message recorded for `field`, if any.
pub fn field_error<'a>(errors: &'a [ValidationError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

pub fn has_field_error(errors: &[ValidationError], field: &str) -> bool {
    errors.iter().any(|e| e.field == field)
}
