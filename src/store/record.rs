//! Roster record as served by the list endpoint.

use serde::{Deserialize, Serialize};

/// One row of a class table.
///
/// `detected` is never read from storage. It always leaves this service as
/// `false` and is flipped by the client once the student has been seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// SQLite `ROWID`
    pub id: i64,
    pub name: String,
    /// Primary external ID
    pub srn: String,
    /// Secondary external ID
    pub prn: String,
    pub detected: bool,
}

impl Record {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        srn: impl Into<String>,
        prn: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            srn: srn.into(),
            prn: prn.into(),
            detected: false,
        }
    }
}
