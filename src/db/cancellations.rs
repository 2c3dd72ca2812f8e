use crate::domain::CancellationRecord;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

/// Appends a cancellation snapshot. Rows are never updated or deleted.
pub fn append_cancellation(
    conn: &Connection,
    hotel_id: &str,
    record: &CancellationRecord,
) -> Result<i64, ServerError> {
    let snapshot = serde_json::to_string(record)?;

    conn.execute(
        "insert into cancellations (hotel_id, room_id, snapshot, cancelled_at) values (?, ?, ?, ?)",
        params![hotel_id, record.room_id, snapshot, record.cancelled_at],
    )
    .map_err(|e| ServerError::DbError(format!("append cancellation failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Newest first.
pub fn list_cancellations(conn: &Connection, hotel_id: &str) -> Result<Vec<CancellationRecord>, ServerError> {
    let mut stmt = conn
        .prepare("select snapshot from cancellations where hotel_id = ? order by cancelled_at desc, id desc")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![hotel_id], |row| row.get::<_, String>(0))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        let snapshot = r.map_err(|e| ServerError::DbError(e.to_string()))?;
        out.push(serde_json::from_str(&snapshot)?);
    }
    Ok(out)
}
