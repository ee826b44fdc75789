//! Error types for the store, the form binder/validator and the renderer.
//!
//! # Design
//! Each concern gets its own enum so callers can map them to distinct
//! outcomes: `StoreError` becomes a 404, `ValidationError` a 400, and
//! `RenderError` is only ever logged by the server.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by `TodoStore` lookups and mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("todo not found: {id}")]
    NotFound { id: String },
}

/// Errors returned while binding and validating a `DocumentRecord`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent or empty, in declaration order.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A field was present but could not be converted to its target type.
    #[error("invalid value for {path}: {reason}")]
    InvalidField { path: &'static str, reason: String },
}

impl ValidationError {
    /// Field paths named by this error.
    pub fn paths(&self) -> Vec<&'static str> {
        match self {
            ValidationError::MissingFields(paths) => paths.clone(),
            ValidationError::InvalidField { path, .. } => vec![*path],
        }
    }
}

/// Errors returned when a rendered page cannot be written out.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write document to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_names_every_path() {
        let err = ValidationError::MissingFields(vec!["Document.Id", "Document.Company.Phone"]);
        assert_eq!(
            err.to_string(),
            "missing required fields: Document.Id, Document.Company.Phone"
        );
    }

    #[test]
    fn invalid_field_reports_its_path() {
        let err = ValidationError::InvalidField {
            path: "Document.Id",
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(err.paths(), vec!["Document.Id"]);
        assert!(err.to_string().starts_with("invalid value for Document.Id"));
    }
}
