//! jsort Domain - Core sorting types
//!
//! This crate defines the record model and the ordering rules used to sort
//! an array of JSON objects by one of their fields.
//! All types here are pure Rust with no I/O dependencies.

pub mod dataset;
pub mod error;
pub mod key;
pub mod kind;
pub mod ordering;
pub mod record;

pub use dataset::Dataset;
pub use error::{DomainError, DomainResult, SortErrorKind};
pub use key::SortKey;
pub use kind::JsonKind;
pub use ordering::{Incomparable, compare_values, total_order};
pub use record::Record;
