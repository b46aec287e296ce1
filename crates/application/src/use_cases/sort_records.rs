//! Sort records use case.

use std::path::{Path, PathBuf};

use jsort_domain::{Dataset, SortKey};
use tracing::{debug, info};

use crate::error::{Access, SortError, SortResult};
use crate::ports::{FileSystem, FileSystemError, JsonCodec};

/// Input file used when none is given.
pub const DEFAULT_INPUT_PATH: &str = "data.json";

/// Output file used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "sorted.json";

/// Input for sorting the records of a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRecordsInput {
    /// The field records are ordered by.
    pub field: SortKey,
    /// File holding the JSON array to sort.
    pub input_path: PathBuf,
    /// File the sorted array is written to.
    pub output_path: PathBuf,
}

impl SortRecordsInput {
    /// Creates an input for `field` using the default file paths.
    #[must_use]
    pub fn new(field: impl Into<SortKey>) -> Self {
        Self {
            field: field.into(),
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Sets the input file.
    #[must_use]
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Sets the output file.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

/// Output of a successful sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRecordsOutput {
    /// The field records were ordered by.
    pub field: SortKey,
    /// File the sorted array was written to.
    pub output_path: PathBuf,
    /// Number of records written.
    pub record_count: usize,
}

/// Use case for sorting the records of a JSON file by one field.
pub struct SortRecords<F: FileSystem, C: JsonCodec> {
    fs: F,
    codec: C,
}

impl<F: FileSystem, C: JsonCodec> SortRecords<F, C> {
    /// Creates a new `SortRecords` use case.
    #[must_use]
    pub const fn new(fs: F, codec: C) -> Self {
        Self { fs, codec }
    }

    /// Reads, validates, sorts and writes the records.
    ///
    /// Checks run in order and the first failure aborts the run. Nothing is
    /// written unless every check and the sort succeed.
    ///
    /// # Errors
    /// - `NotFound` if the input is not an existing regular file
    /// - `PermissionDenied` if the input is unreadable or the output directory unwritable
    /// - `MalformedInput` if the input is not valid JSON
    /// - `Invalid` for shape, emptiness, missing-field and type-mismatch failures
    /// - `Unexpected` for anything else
    pub fn execute(&self, input: &SortRecordsInput) -> SortResult<SortRecordsOutput> {
        let SortRecordsInput {
            field,
            input_path,
            output_path,
        } = input;

        debug!(input = %input_path.display(), "checking input file");
        if !self.fs.is_file(input_path) {
            return Err(SortError::NotFound(input_path.clone()));
        }
        self.fs
            .check_readable(input_path)
            .map_err(|err| read_error(input_path, err))?;

        let output_dir = output_dir(output_path);
        debug!(dir = %output_dir.display(), "checking output directory");
        self.fs
            .check_writable_dir(output_dir)
            .map_err(|err| write_error(output_dir, err))?;

        let bytes = self
            .fs
            .read_file(input_path)
            .map_err(|err| read_error(input_path, err))?;
        let document = self
            .codec
            .decode(&bytes)
            .map_err(|err| SortError::MalformedInput {
                path: input_path.clone(),
                reason: err.to_string(),
            })?;

        let dataset = Dataset::from_value(document, field.clone())?;
        let record_count = dataset.len();
        debug!(field = %field, records = record_count, "sorting records");
        let sorted = dataset.into_sorted()?;

        let encoded = self
            .codec
            .encode(&sorted)
            .map_err(|err| SortError::Unexpected(err.to_string()))?;
        self.fs
            .write_file_atomic(output_path, &encoded)
            .map_err(|err| write_error(output_dir, err))?;

        info!(
            field = %field,
            output = %output_path.display(),
            records = record_count,
            "records sorted"
        );

        Ok(SortRecordsOutput {
            field: field.clone(),
            output_path: output_path.clone(),
            record_count,
        })
    }
}

/// Directory the output file is created in; `.` for bare file names.
fn output_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn read_error(path: &Path, err: FileSystemError) -> SortError {
    match err {
        FileSystemError::NotFound(_) => SortError::NotFound(path.to_path_buf()),
        FileSystemError::PermissionDenied(_) => SortError::PermissionDenied {
            path: path.to_path_buf(),
            access: Access::Read,
        },
        FileSystemError::Io(err) => SortError::Unexpected(err.to_string()),
    }
}

fn write_error(dir: &Path, err: FileSystemError) -> SortError {
    match err {
        FileSystemError::NotFound(_) | FileSystemError::PermissionDenied(_) => {
            SortError::PermissionDenied {
                path: dir.to_path_buf(),
                access: Access::Write,
            }
        }
        FileSystemError::Io(err) => SortError::Unexpected(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::io;
    use std::sync::Mutex;

    use jsort_domain::{Record, SortErrorKind};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;
    use crate::ports::CodecError;

    #[derive(Default)]
    struct MemoryFileSystem {
        files: Mutex<HashMap<PathBuf, Vec<u8>>>,
        unreadable: HashSet<PathBuf>,
        read_only_dirs: HashSet<PathBuf>,
        disk_full: bool,
    }

    impl MemoryFileSystem {
        fn with_file(self, path: &str, contents: &str) -> Self {
            self.files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), contents.as_bytes().to_vec());
            self
        }

        fn contents(&self, path: &str) -> Option<String> {
            self.files
                .lock()
                .unwrap()
                .get(Path::new(path))
                .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
        }
    }

    impl FileSystem for MemoryFileSystem {
        fn is_file(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }

        fn check_readable(&self, path: &Path) -> Result<(), FileSystemError> {
            if self.unreadable.contains(path) {
                return Err(FileSystemError::PermissionDenied(path.to_path_buf()));
            }
            Ok(())
        }

        fn check_writable_dir(&self, dir: &Path) -> Result<(), FileSystemError> {
            if self.read_only_dirs.contains(dir) {
                return Err(FileSystemError::PermissionDenied(dir.to_path_buf()));
            }
            Ok(())
        }

        fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))
        }

        fn write_file_atomic(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
            if self.disk_full {
                return Err(FileSystemError::Io(io::Error::other("no space left on device")));
            }
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), contents.to_vec());
            Ok(())
        }
    }

    struct PlainCodec;

    impl JsonCodec for PlainCodec {
        fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
            serde_json::from_slice(bytes).map_err(|err| CodecError::Decode(err.to_string()))
        }

        fn encode(&self, records: &[Record]) -> Result<Vec<u8>, CodecError> {
            serde_json::to_vec(records).map_err(|err| CodecError::Encode(err.to_string()))
        }
    }

    fn run(fs: &MemoryFileSystem, field: &str) -> SortResult<SortRecordsOutput> {
        SortRecords::new(fs, PlainCodec).execute(&SortRecordsInput::new(field))
    }

    fn error_kind(fs: &MemoryFileSystem, field: &str) -> SortErrorKind {
        run(fs, field).expect_err("sort should fail").kind()
    }

    impl FileSystem for &MemoryFileSystem {
        fn is_file(&self, path: &Path) -> bool {
            (**self).is_file(path)
        }

        fn check_readable(&self, path: &Path) -> Result<(), FileSystemError> {
            (**self).check_readable(path)
        }

        fn check_writable_dir(&self, dir: &Path) -> Result<(), FileSystemError> {
            (**self).check_writable_dir(dir)
        }

        fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
            (**self).read_file(path)
        }

        fn write_file_atomic(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
            (**self).write_file_atomic(path, contents)
        }
    }

    #[test]
    fn test_sorts_and_writes_to_default_output() {
        let fs = MemoryFileSystem::default()
            .with_file("data.json", r#"[{"Name":"Bob"},{"Name":"Ann"}]"#);

        let output = run(&fs, "Name").expect("sort should succeed");

        assert_eq!(output.record_count, 2);
        assert_eq!(output.output_path, PathBuf::from("sorted.json"));
        assert_eq!(output.field.as_str(), "Name");
        let written: Value = serde_json::from_str(&fs.contents("sorted.json").unwrap()).unwrap();
        assert_eq!(written, json!([{"Name": "Ann"}, {"Name": "Bob"}]));
    }

    #[test]
    fn test_custom_paths_are_used() {
        let fs = MemoryFileSystem::default().with_file("in/people.json", r#"[{"PLZ":2},{"PLZ":1}]"#);
        let input = SortRecordsInput::new("PLZ")
            .with_input_path("in/people.json")
            .with_output_path("out/people.json");

        SortRecords::new(&fs, PlainCodec)
            .execute(&input)
            .expect("sort should succeed");

        assert_eq!(fs.contents("out/people.json").unwrap(), r#"[{"PLZ":1},{"PLZ":2}]"#);
    }

    #[test]
    fn test_missing_input_is_not_found() {
        let fs = MemoryFileSystem::default();
        assert_eq!(error_kind(&fs, "Name"), SortErrorKind::NotFound);
    }

    #[test]
    fn test_unreadable_input_is_permission_denied() {
        let mut fs = MemoryFileSystem::default().with_file("data.json", "[]");
        fs.unreadable.insert(PathBuf::from("data.json"));

        let err = run(&fs, "Name").expect_err("sort should fail");
        assert_eq!(err.to_string(), "no read permission for 'data.json'");
    }

    #[test]
    fn test_bare_output_name_checks_current_directory() {
        let mut fs = MemoryFileSystem::default().with_file("data.json", r#"[{"Name":"Ann"}]"#);
        fs.read_only_dirs.insert(PathBuf::from("."));

        let err = run(&fs, "Name").expect_err("sort should fail");
        assert_eq!(err.kind(), SortErrorKind::PermissionDenied);
        assert_eq!(err.to_string(), "no write permission for '.'");
    }

    #[test]
    fn test_permission_checks_run_before_parsing() {
        let mut fs = MemoryFileSystem::default().with_file("data.json", "{not valid json");
        fs.read_only_dirs.insert(PathBuf::from("."));

        assert_eq!(error_kind(&fs, "Name"), SortErrorKind::PermissionDenied);
    }

    #[test]
    fn test_malformed_input() {
        let fs = MemoryFileSystem::default().with_file("data.json", "{not valid json");

        let err = run(&fs, "Name").expect_err("sort should fail");
        assert_eq!(err.kind(), SortErrorKind::MalformedInput);
        assert!(err.to_string().starts_with("the file 'data.json' does not contain valid JSON"));
    }

    #[test]
    fn test_validation_failures_write_nothing() {
        let cases = [
            (r#"{"Name":"Ann"}"#, SortErrorKind::ShapeMismatch),
            ("[]", SortErrorKind::EmptyInput),
            (r#"[{"Name":"Ann"},{"PLZ":12345}]"#, SortErrorKind::MissingField),
            (r#"[{"Name":"Ann"},{"Name":7}]"#, SortErrorKind::TypeMismatch),
        ];

        for (document, expected) in cases {
            let fs = MemoryFileSystem::default()
                .with_file("data.json", document)
                .with_file("sorted.json", "previous");

            assert_eq!(error_kind(&fs, "Name"), expected, "input: {document}");
            assert_eq!(fs.contents("sorted.json").unwrap(), "previous");
        }
    }

    #[test]
    fn test_write_failure_is_unexpected() {
        let mut fs = MemoryFileSystem::default().with_file("data.json", r#"[{"Name":"Ann"}]"#);
        fs.disk_full = true;

        let err = run(&fs, "Name").expect_err("sort should fail");
        assert_eq!(err.kind(), SortErrorKind::Unexpected);
        assert!(err.to_string().contains("no space left on device"));
    }

    #[test]
    fn test_output_dir_of_bare_name_is_current_directory() {
        assert_eq!(output_dir(Path::new("sorted.json")), Path::new("."));
        assert_eq!(output_dir(Path::new("out/sorted.json")), Path::new("out"));
    }
}
