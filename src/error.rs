//! Custom error types for Finanthrope
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Section;

/// The main error type for Finanthrope operations
#[derive(Error, Debug)]
pub enum FinanthropeError {
    /// A category key that is not part of the section's catalog
    #[error("Invalid category '{key}' for section {section}")]
    InvalidCategoryKey { section: Section, key: String },

    /// A negative or non-finite amount
    #[error("Invalid amount: {0} (amounts must be non-negative and fit in cents)")]
    InvalidAmount(String),

    /// Row index outside the current bounds of a section
    #[error("Row {index} is out of range for section {section} ({len} rows)")]
    OutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },

    /// Unrecognised section identifier
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Unrecognised locale tag
    #[error("Unknown language: {0} (expected 'fr' or 'en')")]
    UnknownLocale(String),

    /// Export construction errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors (document parsing and validation)
    #[error("Import error: {0}")]
    Import(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A session command line that does not parse
    #[error("{0}")]
    Usage(String),
}

impl FinanthropeError {
    /// Create an "invalid category" error
    pub fn invalid_category(section: Section, key: impl Into<String>) -> Self {
        Self::InvalidCategoryKey {
            section,
            key: key.into(),
        }
    }

    /// Create an "invalid amount" error from the offending value
    pub fn invalid_amount(value: f64) -> Self {
        Self::InvalidAmount(value.to_string())
    }

    /// Check if this is one of the row validation errors
    ///
    /// These are recoverable: the caller re-prompts and the store is untouched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCategoryKey { .. } | Self::InvalidAmount(_) | Self::OutOfRange { .. }
        )
    }

    /// Check if this is an export error
    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinanthropeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanthropeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Finanthrope operations
pub type FinanthropeResult<T> = Result<T, FinanthropeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanthropeError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_category_error() {
        let err = FinanthropeError::invalid_category(Section::Income, "food");
        assert_eq!(
            err.to_string(),
            "Invalid category 'food' for section income"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_out_of_range_error() {
        let err = FinanthropeError::OutOfRange {
            section: Section::Taxes,
            index: 3,
            len: 1,
        };
        assert_eq!(
            err.to_string(),
            "Row 3 is out of range for section taxes (1 rows)"
        );
        assert!(err.is_validation());
        assert!(!err.is_export());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanthropeError = io_err.into();
        assert!(matches!(err, FinanthropeError::Io(_)));
    }
}
