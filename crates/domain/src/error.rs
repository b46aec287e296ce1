//! Domain error types

use thiserror::Error;

use crate::kind::JsonKind;

/// Domain-level errors raised while validating or sorting a dataset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The top-level JSON value is not an array.
    #[error("the JSON file must contain an array of objects, found {found}")]
    ShapeMismatch {
        /// Kind of the value that was found instead.
        found: JsonKind,
    },

    /// The array has no elements.
    #[error("the JSON file contains no data")]
    EmptyInput,

    /// An element is not an object or lacks the sort key.
    #[error("the field '{field}' does not exist in all objects (first missing at index {index})")]
    MissingField {
        /// The requested sort key.
        field: String,
        /// Position of the first offending element.
        index: usize,
    },

    /// Two sort-key values cannot be ordered against each other.
    #[error("cannot compare values of field '{field}': {left} and {right} are not comparable")]
    TypeMismatch {
        /// The requested sort key.
        field: String,
        /// Kind of the left-hand value.
        left: JsonKind,
        /// Kind of the right-hand value.
        right: JsonKind,
    },
}

impl DomainError {
    /// Returns the error category for reporting.
    #[must_use]
    pub const fn kind(&self) -> SortErrorKind {
        match self {
            Self::ShapeMismatch { .. } => SortErrorKind::ShapeMismatch,
            Self::EmptyInput => SortErrorKind::EmptyInput,
            Self::MissingField { .. } => SortErrorKind::MissingField,
            Self::TypeMismatch { .. } => SortErrorKind::TypeMismatch,
        }
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Category of a failed sort run.
///
/// Every failure, whichever layer raised it, maps onto exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortErrorKind {
    /// The input file does not exist or is not a regular file.
    NotFound,

    /// The input is unreadable or the output directory is unwritable.
    PermissionDenied,

    /// The input is not well-formed JSON.
    MalformedInput,

    /// The top-level JSON value is not an array.
    ShapeMismatch,

    /// The array is empty.
    EmptyInput,

    /// At least one element lacks the sort key.
    MissingField,

    /// Sort-key values are not mutually comparable.
    TypeMismatch,

    /// Anything else, e.g. a full disk during the write.
    Unexpected,
}

impl SortErrorKind {
    /// Returns a stable identifier for this category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::PermissionDenied => "permission_denied",
            Self::MalformedInput => "malformed_input",
            Self::ShapeMismatch => "shape_mismatch",
            Self::EmptyInput => "empty_input",
            Self::MissingField => "missing_field",
            Self::TypeMismatch => "type_mismatch",
            Self::Unexpected => "unexpected",
        }
    }
}
