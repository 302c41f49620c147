use thiserror::Error;

use super::validation::format_errors;

/// Errors that can occur while finalizing, submitting, or projecting an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// One or more validation rules failed; submission is blocked.
    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Projection was attempted on an invoice whose totals were never
    /// calculated. This is a caller bug, not a user-facing condition.
    #[error("projection precondition violated: {0}")]
    Projection(String),

    /// The external store rejected or failed the handoff. The in-memory
    /// draft is untouched; the caller may retry submission.
    #[error("could not save invoice: {0}")]
    Store(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[2].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
