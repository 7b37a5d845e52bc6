//! Custom error types for the receipt tool
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for receipt operations
#[derive(Error, Debug)]
pub enum ReceiptError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for submitted receipts
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors (lock poisoning and the like)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Document rendering errors
    #[error("Render error: {0}")]
    Render(String),
}

impl ReceiptError {
    /// Create a "not found" error for receipts
    pub fn receipt_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Receipt",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ReceiptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReceiptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for receipt operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;
