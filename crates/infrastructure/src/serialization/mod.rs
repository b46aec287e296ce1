//! JSON serialization for sorted output.
//!
//! Output matches what the records looked like on input:
//! - Object keys keep their source order
//! - 2-space indentation
//! - Non-ASCII characters written literally, UTF-8 without BOM

mod codec;
mod json;

pub use codec::SerdeJsonCodec;
pub use json::*;
