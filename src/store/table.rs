//! Caller-supplied table identifiers.
//!
//! Table names arrive straight from query parameters and cannot be bound as
//! statement parameters. `TableName` is the only way a name reaches SQL text,
//! and it always renders as a quoted identifier, so the caller can pick any
//! table in the file but cannot extend the statement.

use std::fmt;

use super::errors::{StoreError, StoreResult};

/// A non-empty table name taken from a request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    /// Wrap a raw name, rejecting the empty string
    pub fn new(raw: impl Into<String>) -> StoreResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(StoreError::EmptyTableName);
        }
        Ok(Self(raw))
    }

    /// The name exactly as the caller sent it
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// SQL identifier form: wrapped in double quotes, inner quotes doubled
    pub fn quoted(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 2);
        out.push('"');
        for c in self.0.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
        out
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
