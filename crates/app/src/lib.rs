//! jsort - Sort a JSON array of objects by one field
//!
//! Wires the sort use case to the real filesystem and the `serde_json`
//! codec, and renders the outcome for the console.

use std::io::{self, Write};
use std::path::Path;

use jsort_application::{SortRecords, SortResult};
use jsort_infrastructure::{SerdeJsonCodec, StdFileSystem};
use tracing::debug;

pub use jsort_application::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, SortError, SortRecordsInput, SortRecordsOutput,
};

/// Runs the sort against the real filesystem.
///
/// # Errors
///
/// Returns the first failed check, see [`SortRecords::execute`].
pub fn sort(input: &SortRecordsInput) -> SortResult<SortRecordsOutput> {
    SortRecords::new(StdFileSystem::new(), SerdeJsonCodec::new()).execute(input)
}

/// Sorts the records in `input_path` by `field` and writes them to `output_path`.
///
/// Never fails: the confirmation goes to standard output and any error is
/// printed to standard error as `Error: <description>`.
pub fn sort_by_field(field: &str, input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) {
    let input = SortRecordsInput::new(field)
        .with_input_path(input_path.as_ref())
        .with_output_path(output_path.as_ref());

    let result = sort(&input);
    if let Err(err) = &result {
        debug!(kind = err.kind().label(), "sort failed");
    }

    // nowhere left to report a broken console
    let _ = report(&result, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Renders the outcome of a sort run.
///
/// # Errors
///
/// Returns an error if writing to either stream fails.
pub fn report(
    result: &SortResult<SortRecordsOutput>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match result {
        Ok(output) => writeln!(
            out,
            "Data sorted by '{}' and saved to '{}'.",
            output.field,
            output.output_path.display()
        ),
        Err(error) => writeln!(err, "Error: {error}"),
    }
}
