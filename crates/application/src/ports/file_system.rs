//! File system abstraction port.

use std::path::{Path, PathBuf};

/// Error type for file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// File or directory not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction over the file system operations the sorter needs.
///
/// This trait allows mocking file system access in tests.
pub trait FileSystem: Send + Sync {
    /// Checks if a path is an existing regular file, following symlinks.
    fn is_file(&self, path: &Path) -> bool;

    /// Checks that the file can be opened for reading.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` if read access is refused.
    fn check_readable(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Checks that new files can be created inside `dir`.
    ///
    /// A directory that does not exist is not writable.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` if write access is refused.
    fn check_writable_dir(&self, dir: &Path) -> Result<(), FileSystemError>;

    /// Reads a file's contents as bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError>;

    /// Replaces the file at `path` with `contents`.
    ///
    /// Either the whole content lands at `path` or the previous file (if
    /// any) is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_file_atomic(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError>;
}
