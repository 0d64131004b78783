//! # Store Errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Roster store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or is not a SQLite database
    #[error("failed to open roster database at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// The statement could not be prepared or executed against the table
    #[error("no such table '{table}': {source}")]
    NoSuchTable {
        table: String,
        source: rusqlite::Error,
    },

    /// The table is not on the configured allow-list
    #[error("table '{0}' is not allowed")]
    TableNotAllowed(String),

    /// A result row did not match the expected column shape
    #[error("failed to scan row from '{table}': {source}")]
    Scan {
        table: String,
        source: rusqlite::Error,
    },

    /// Any other failure while running a query
    #[error("query on '{table}' failed: {source}")]
    Query {
        table: String,
        source: rusqlite::Error,
    },

    /// A previous holder of the connection panicked
    #[error("database connection lock poisoned")]
    Poisoned,

    /// An empty table name was supplied
    #[error("table name must not be empty")]
    EmptyTableName,
}

impl StoreError {
    /// True when the error means the table cannot be queried at all
    pub fn is_missing_table(&self) -> bool {
        matches!(
            self,
            StoreError::NoSuchTable { .. } | StoreError::TableNotAllowed(_)
        )
    }
}
