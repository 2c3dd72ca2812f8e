// src/db/enquiries.rs
use crate::domain::enquiry::{Enquiry, EnquiryDraft, EnquiryType};
use crate::errors::ServerError;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ENQUIRY_COLUMNS: &str = "id, user_id, enquiry_type, booking_date, notes, created_at";

fn enquiry_from_row(row: &Row<'_>) -> rusqlite::Result<Enquiry> {
    let raw_type: String = row.get(2)?;
    let enquiry_type = EnquiryType::parse(&raw_type).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            format!("unknown enquiry type '{raw_type}'").into(),
        )
    })?;

    Ok(Enquiry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        enquiry_type,
        booking_date: row.get::<_, NaiveDate>(3)?,
        notes: row.get(4)?,
        created_at: row.get::<_, NaiveDateTime>(5)?,
    })
}

pub fn create_enquiry(
    conn: &Connection,
    hotel_id: &str,
    user_id: &str,
    draft: &EnquiryDraft,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into enquiries (hotel_id, user_id, enquiry_type, booking_date, notes, created_at)
        values (?, ?, ?, ?, ?, ?)
        "#,
        params![
            hotel_id,
            user_id,
            draft.enquiry_type.as_str(),
            draft.booking_date,
            draft.notes,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert enquiry failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Enquiries logged by `user_id`, newest first.
pub fn list_enquiries_for_user(
    conn: &Connection,
    hotel_id: &str,
    user_id: &str,
) -> Result<Vec<Enquiry>, ServerError> {
    let sql = format!(
        "select {ENQUIRY_COLUMNS} from enquiries where hotel_id = ? and user_id = ? order by created_at desc, id desc"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![hotel_id, user_id], enquiry_from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

pub fn get_enquiry(conn: &Connection, hotel_id: &str, id: i64) -> Result<Option<Enquiry>, ServerError> {
    let sql = format!("select {ENQUIRY_COLUMNS} from enquiries where hotel_id = ? and id = ?");
    conn.query_row(&sql, params![hotel_id, id], enquiry_from_row)
        .optional()
        .map_err(|e| ServerError::DbError(format!("get enquiry failed: {e}")))
}

pub fn update_enquiry(conn: &Connection, hotel_id: &str, id: i64, draft: &EnquiryDraft) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "update enquiries set enquiry_type = ?, booking_date = ?, notes = ? where hotel_id = ? and id = ?",
            params![draft.enquiry_type.as_str(), draft.booking_date, draft.notes, hotel_id, id],
        )
        .map_err(|e| ServerError::DbError(format!("update enquiry failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn delete_enquiry(conn: &Connection, hotel_id: &str, id: i64) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "delete from enquiries where hotel_id = ? and id = ?",
            params![hotel_id, id],
        )
        .map_err(|e| ServerError::DbError(format!("delete enquiry failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}
