//! SQL for the two roster reads.
//!
//! Both functions run against a borrowed connection so they can be driven
//! directly from tests with an in-memory database.

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::errors::{StoreError, StoreResult};
use super::record::Record;
use super::table::TableName;

/// Read every row of `table` as a [`Record`].
///
/// Any decode failure discards the rows collected so far.
pub fn list_records(conn: &Connection, table: &TableName) -> StoreResult<Vec<Record>> {
    let sql = format!("SELECT ROWID, srn, prn, name FROM {}", table.quoted());

    let no_such_table = |source: rusqlite::Error| StoreError::NoSuchTable {
        table: table.to_string(),
        source,
    };
    let scan_failed = |source: rusqlite::Error| StoreError::Scan {
        table: table.to_string(),
        source,
    };

    let mut stmt = conn.prepare(&sql).map_err(no_such_table)?;
    let mut rows = stmt.query([]).map_err(no_such_table)?;

    let mut records = Vec::new();
    while let Some(row) = rows.next().map_err(scan_failed)? {
        records.push(scan_record(row).map_err(scan_failed)?);
    }

    Ok(records)
}

/// Find the `ROWID` of the row whose `prn` equals `secondary_id`.
pub fn lookup_row_id(
    conn: &Connection,
    table: &TableName,
    secondary_id: &str,
) -> StoreResult<Option<i64>> {
    let sql = format!("SELECT ROWID FROM {} WHERE prn = ?1", table.quoted());

    conn.query_row(&sql, params![secondary_id], |row| row.get(0))
        .optional()
        .map_err(|source| StoreError::Query {
            table: table.to_string(),
            source,
        })
}

fn scan_record(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        srn: text_column(row, 1)?,
        prn: text_column(row, 2)?,
        name: text_column(row, 3)?,
        detected: false,
    })
}

/// Read any non-NULL value as text.
///
/// Class tables are managed elsewhere and often leave ID columns untyped, so
/// a numeric PRN is stored as INTEGER. Only NULL is a decode failure.
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    match row.get_ref(idx)? {
        ValueRef::Null => row.get(idx),
        ValueRef::Integer(v) => Ok(v.to_string()),
        ValueRef::Real(v) => Ok(v.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE CSE101 (srn TEXT, prn TEXT, name TEXT);
             INSERT INTO CSE101 (ROWID, srn, prn, name)
                 VALUES (7, 'X123', 'PES1UG20CS001', 'Asha');
             INSERT INTO CSE101 (ROWID, srn, prn, name)
                 VALUES (9, 'X456', 'PES1UG20CS002', 'Ravi');",
        )
        .unwrap();
        conn
    }

    fn table(name: &str) -> TableName {
        TableName::new(name).unwrap()
    }

    #[test]
    fn test_list_records_maps_columns() {
        let conn = roster();
        let records = list_records(&conn, &table("CSE101")).unwrap();

        assert_eq!(
            records,
            vec![
                Record::new(7, "Asha", "X123", "PES1UG20CS001"),
                Record::new(9, "Ravi", "X456", "PES1UG20CS002"),
            ]
        );
    }

    #[test]
    fn test_list_records_empty_table() {
        let conn = roster();
        conn.execute_batch("CREATE TABLE EMPTY (srn TEXT, prn TEXT, name TEXT);")
            .unwrap();

        let records = list_records(&conn, &table("EMPTY")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_list_records_ignores_stored_detected_column() {
        let conn = roster();
        conn.execute_batch(
            "CREATE TABLE ECE201 (srn TEXT, prn TEXT, name TEXT, detected INTEGER);
             INSERT INTO ECE201 VALUES ('A1', 'P1', 'Meera', 1);",
        )
        .unwrap();

        let records = list_records(&conn, &table("ECE201")).unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].detected);
    }

    #[test]
    fn test_list_records_untyped_columns_read_as_text() {
        let conn = roster();
        conn.execute_batch(
            "CREATE TABLE CSE102 (srn, prn, name);
             INSERT INTO CSE102 (ROWID, srn, prn, name) VALUES (3, 'X9', 12345, 'Dev');
             INSERT INTO CSE102 (ROWID, srn, prn, name) VALUES (4, 2.5, x'50455331', 'Isha');",
        )
        .unwrap();

        let records = list_records(&conn, &table("CSE102")).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new(3, "Dev", "X9", "12345"),
                Record::new(4, "Isha", "2.5", "PES1"),
            ]
        );
    }

    #[test]
    fn test_list_records_missing_table() {
        let conn = roster();
        let err = list_records(&conn, &table("NOPE")).unwrap_err();
        assert!(matches!(err, StoreError::NoSuchTable { .. }));
    }

    #[test]
    fn test_list_records_null_column_is_scan_error() {
        let conn = roster();
        conn.execute("INSERT INTO CSE101 (srn, prn, name) VALUES ('X789', 'P3', NULL)", [])
            .unwrap();

        let err = list_records(&conn, &table("CSE101")).unwrap_err();
        assert!(matches!(err, StoreError::Scan { .. }));
    }

    #[test]
    fn test_list_records_cannot_splice_sql() {
        let conn = roster();
        let err = list_records(&conn, &table("CSE101; DROP TABLE CSE101")).unwrap_err();
        assert!(matches!(err, StoreError::NoSuchTable { .. }));

        // Table survives
        assert_eq!(list_records(&conn, &table("CSE101")).unwrap().len(), 2);
    }

    #[test]
    fn test_lookup_row_id_found() {
        let conn = roster();
        let id = lookup_row_id(&conn, &table("CSE101"), "PES1UG20CS002").unwrap();
        assert_eq!(id, Some(9));
    }

    #[test]
    fn test_lookup_row_id_not_found() {
        let conn = roster();
        let id = lookup_row_id(&conn, &table("CSE101"), "PES1UG20CS999").unwrap();
        assert_eq!(id, None);
    }

    #[test]
    fn test_lookup_row_id_binds_value() {
        let conn = roster();
        let id = lookup_row_id(&conn, &table("CSE101"), "' OR 1=1 --").unwrap();
        assert_eq!(id, None);
    }

    #[test]
    fn test_lookup_row_id_missing_table() {
        let conn = roster();
        let err = lookup_row_id(&conn, &table("NOPE"), "PES1UG20CS001").unwrap_err();
        assert!(matches!(err, StoreError::Query { .. }));
    }
}
