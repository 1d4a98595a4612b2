//! Error types for DietWise
//!
//! The calculators never fail; these errors come from input validation only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single rejected profile or food-log field
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
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
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let first = errors
            .field_errors()
            .into_iter()
            .next()
            .and_then(|(field, errs)| errs.first().map(|e| (field, e.clone())));

        match first {
            Some((field, err)) => {
                let message = err
                    .message
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", err.code));
                ValidationError::new(field.to_string(), message)
            }
            None => ValidationError::new("input", errors.to_string()),
        }
    }
}
