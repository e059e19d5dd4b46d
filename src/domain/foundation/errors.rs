//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// A single field that failed its validation rule.
///
/// The display form is the user-facing message, so a form can render
/// `err.to_string()` directly under the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    EmptyField { field: String, message: String },

    #[error("{message}")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
        message: String,
    },

    #[error("{message}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
        message: String,
    },

    #[error("{message}")]
    InvalidFormat { field: String, message: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a minimum-length validation error.
    pub fn too_short(
        field: impl Into<String>,
        min: usize,
        actual: usize,
        message: impl Into<String>,
    ) -> Self {
        ValidationError::TooShort {
            field: field.into(),
            min,
            actual,
            message: message.into(),
        }
    }

    /// Creates a maximum-length validation error.
    pub fn too_long(
        field: impl Into<String>,
        max: usize,
        actual: usize,
        message: impl Into<String>,
    ) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
            message: message.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field, .. }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }

    /// Returns the user-facing message.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::EmptyField { message, .. }
            | ValidationError::TooShort { message, .. }
            | ValidationError::TooLong { message, .. }
            | ValidationError::InvalidFormat { message, .. } => message,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Store errors
    IndexOutOfRange,
    StaleRevision,

    // State errors
    InvalidStateTransition,
    TemplateNotSelected,
    TemplateNotFound,

    // Export errors
    ExportFailed,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            ErrorCode::StaleRevision => "STALE_REVISION",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::TemplateNotSelected => "TEMPLATE_NOT_SELECTED",
            ErrorCode::TemplateNotFound => "TEMPLATE_NOT_FOUND",
            ErrorCode::ExportFailed => "EXPORT_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an index error for a positional collection operation.
    pub fn index_out_of_range(collection: impl fmt::Display, index: usize, len: usize) -> Self {
        Self::new(
            ErrorCode::IndexOutOfRange,
            format!(
                "Index {} is out of range for {} (length {})",
                index, collection, len
            ),
        )
        .with_detail("collection", collection.to_string())
        .with_detail("index", index.to_string())
        .with_detail("len", len.to_string())
    }

    /// Creates the error raised when a wizard or preview path runs without a template.
    pub fn template_not_selected() -> Self {
        Self::new(
            ErrorCode::TemplateNotSelected,
            "A template must be selected before editing or previewing the CV",
        )
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns true if this error signals a caller bug rather than a user mistake.
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::IndexOutOfRange | ErrorCode::StaleRevision | ErrorCode::InternalError
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
