//! # Roster Store
//!
//! Read-only access to the class roster database.
//!
//! The roster is a pre-existing SQLite file with one table per class. Every
//! table carries `srn`, `prn` and `name` text columns plus SQLite's implicit
//! `ROWID`. This module never creates, migrates or writes to those tables.

mod connector;
mod errors;
mod queries;
mod record;
mod table;

pub use connector::{Datastore, DatabaseConfig};
pub use errors::{StoreError, StoreResult};
pub use queries::{list_records, lookup_row_id};
pub use record::Record;
pub use table::TableName;

/// Read access to roster tables.
///
/// The HTTP layer only talks to this trait, so handlers can be exercised
/// against in-memory doubles.
pub trait RosterStore: Send + Sync {
    /// Every row of `table`, in storage order.
    fn list_records(&self, table: &TableName) -> StoreResult<Vec<Record>>;

    /// The `ROWID` of the row whose `prn` equals `secondary_id`.
    ///
    /// Returns `Ok(None)` when no row matches.
    fn lookup_row_id(&self, table: &TableName, secondary_id: &str) -> StoreResult<Option<i64>>;
}
