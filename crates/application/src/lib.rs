//! jsort Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the filesystem and the JSON codec)
//! - The sort use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{Access, SortError, SortResult};
pub use use_cases::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, SortRecords, SortRecordsInput, SortRecordsOutput,
};
