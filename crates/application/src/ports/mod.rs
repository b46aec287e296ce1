//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the sort use case and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod file_system;
mod json_codec;

pub use file_system::{FileSystem, FileSystemError};
pub use json_codec::{CodecError, JsonCodec};
