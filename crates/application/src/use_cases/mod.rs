//! Application use cases (business logic orchestration).

mod sort_records;

pub use sort_records::*;
