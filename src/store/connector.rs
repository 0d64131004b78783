//! # Datastore Connector
//!
//! Opens the single long-lived connection to the roster file.
//!
//! The file is an external contract: it must already exist and is never
//! created here. The connection is shared by every request handler behind a
//! mutex and closed when the last `Arc<Datastore>` is dropped.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::errors::{StoreError, StoreResult};
use super::queries;
use super::record::Record;
use super::table::TableName;
use super::RosterStore;

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the roster file (default: "./pes-people-2024-11-01.db")
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Open without write access (default: false)
    #[serde(default)]
    pub read_only: bool,

    /// How long a statement waits on a locked database (default: 5000)
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Tables that may be queried. Empty means any table.
    #[serde(default)]
    pub allowed_tables: Vec<String>,
}

fn default_path() -> PathBuf {
    PathBuf::from("./pes-people-2024-11-01.db")
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            read_only: false,
            busy_timeout_ms: default_busy_timeout_ms(),
            allowed_tables: Vec::new(),
        }
    }
}

impl DatabaseConfig {
    /// Create a config pointing at `path` with everything else defaulted
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    fn open_flags(&self) -> OpenFlags {
        let access = if self.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        };
        access | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX
    }
}

/// The roster database handle
pub struct Datastore {
    conn: Mutex<Connection>,
    path: PathBuf,
    /// Lowercased; SQLite matches table names case-insensitively
    allowed_tables: BTreeSet<String>,
}

impl Datastore {
    /// Open the configured roster file.
    ///
    /// Fails if the file is missing or is not a SQLite database.
    pub fn open(config: &DatabaseConfig) -> StoreResult<Self> {
        let path = config.path.clone();
        let open_failed = |source: rusqlite::Error| StoreError::Open {
            path: path.clone(),
            source,
        };

        let conn = Connection::open_with_flags(&path, config.open_flags()).map_err(open_failed)?;
        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
            .map_err(open_failed)?;

        // Opening is lazy about the file header; touch the schema to verify it
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(open_failed)?;

        info!(
            path = %path.display(),
            read_only = config.read_only,
            "roster database opened"
        );

        Ok(Self::from_connection(conn, path, &config.allowed_tables))
    }

    /// Wrap an already open connection
    pub fn from_connection(
        conn: Connection,
        path: impl Into<PathBuf>,
        allowed_tables: &[String],
    ) -> Self {
        Self {
            conn: Mutex::new(conn),
            path: path.into(),
            allowed_tables: allowed_tables
                .iter()
                .map(|name| name.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check_allowed(&self, table: &TableName) -> StoreResult<()> {
        if self.allowed_tables.is_empty()
            || self
                .allowed_tables
                .contains(&table.as_str().to_ascii_lowercase())
        {
            Ok(())
        } else {
            Err(StoreError::TableNotAllowed(table.to_string()))
        }
    }

    fn connection(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl RosterStore for Datastore {
    fn list_records(&self, table: &TableName) -> StoreResult<Vec<Record>> {
        self.check_allowed(table)?;
        let conn = self.connection()?;
        queries::list_records(&conn, table)
    }

    fn lookup_row_id(&self, table: &TableName, secondary_id: &str) -> StoreResult<Option<i64>> {
        self.check_allowed(table)?;
        let conn = self.connection()?;
        queries::lookup_row_id(&conn, table, secondary_id)
    }
}
