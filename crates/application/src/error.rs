//! Application error types

use std::fmt;
use std::path::PathBuf;

use jsort_domain::{DomainError, SortErrorKind};
use thiserror::Error;

/// The kind of access that was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reading the input file.
    Read,
    /// Creating files in the output directory.
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// Errors returned by the sort use case.
#[derive(Debug, Error)]
pub enum SortError {
    /// The input file does not exist or is not a regular file.
    #[error("the file '{}' was not found", .0.display())]
    NotFound(PathBuf),

    /// Read or write access was refused.
    #[error("no {access} permission for '{}'", path.display())]
    PermissionDenied {
        /// The input file (read) or the output directory (write).
        path: PathBuf,
        /// Which access was refused.
        access: Access,
    },

    /// The input file is not well-formed JSON.
    #[error("the file '{}' does not contain valid JSON: {reason}", path.display())]
    MalformedInput {
        /// The input file.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// The decoded document failed validation or could not be sorted.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// Any other failure.
    #[error("an unexpected error occurred: {0}")]
    Unexpected(String),
}

impl SortError {
    /// Returns the error category for reporting.
    #[must_use]
    pub const fn kind(&self) -> SortErrorKind {
        match self {
            Self::NotFound(_) => SortErrorKind::NotFound,
            Self::PermissionDenied { .. } => SortErrorKind::PermissionDenied,
            Self::MalformedInput { .. } => SortErrorKind::MalformedInput,
            Self::Invalid(err) => err.kind(),
            Self::Unexpected(_) => SortErrorKind::Unexpected,
        }
    }
}

/// Result type alias for the sort use case.
pub type SortResult<T> = Result<T, SortError>;
