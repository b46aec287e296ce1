//! Real file system implementation.

use std::fs::{self, File, Permissions};
use std::io::{self, Write};
use std::path::Path;

use jsort_application::ports::{FileSystem, FileSystemError};
use tempfile::NamedTempFile;
use tracing::debug;

/// Real file system implementation using `std::fs`.
///
/// Writes go through a temporary file in the target directory that is
/// renamed over the destination once fully written.
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Creates a new `StdFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_file())
    }

    fn check_readable(&self, path: &Path) -> Result<(), FileSystemError> {
        File::open(path)
            .map(drop)
            .map_err(|e| classify(path, e))
    }

    fn check_writable_dir(&self, dir: &Path) -> Result<(), FileSystemError> {
        // Unnamed where the platform allows it, removed on drop otherwise
        tempfile::tempfile_in(dir)
            .map(drop)
            .map_err(|e| classify(dir, e))
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        fs::read(path).map_err(|e| classify(path, e))
    }

    fn write_file_atomic(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| classify(dir, e))?;
        debug!(staged = %staged.path().display(), target = %path.display(), "staging output");

        staged.write_all(contents)?;
        staged.as_file().sync_all()?;
        if let Some(permissions) = target_permissions(path) {
            staged.as_file().set_permissions(permissions)?;
        }

        staged
            .persist(path)
            .map(drop)
            .map_err(|e| classify(path, e.error))
    }
}

/// Permissions the written file should end up with: those of the file being
/// replaced, or the usual mode for new files.
fn target_permissions(path: &Path) -> Option<Permissions> {
    fs::metadata(path)
        .map(|m| m.permissions())
        .ok()
        .or_else(new_file_permissions)
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
const fn new_file_permissions() -> Option<Permissions> {
    None
}

fn classify(path: &Path, err: io::Error) -> FileSystemError {
    match err.kind() {
        io::ErrorKind::NotFound => FileSystemError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
            FileSystemError::PermissionDenied(path.to_path_buf())
        }
        _ => FileSystemError::Io(err),
    }
}
