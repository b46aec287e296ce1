//! Sort key type.

use std::fmt;

/// Name of the top-level field records are ordered by.
///
/// Any string is accepted, including the empty string; the only check applied
/// to a key is that every record contains it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey(String);

impl SortKey {
    /// Creates a new sort key.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the field name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SortKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SortKey {
    fn from(name: String) -> Self {
        Self(name)
    }
}
