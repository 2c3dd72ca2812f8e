// src/db/rooms.rs
use crate::config::RosterEntry;
use crate::domain::ledger::RoomPatch;
use crate::domain::Room;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

/// Decodes a stored document, refusing stays that end on or before they start.
fn decode_room(hotel_id: &str, room_id: &str, doc: &str) -> Result<Room, ServerError> {
    let room: Room = serde_json::from_str(doc)?;

    if let Some(b) = &room.booking {
        if b.check_out <= b.check_in {
            tracing::error!(
                hotel_id,
                room_id,
                check_in = %b.check_in,
                check_out = %b.check_out,
                "stored booking has an invalid stay"
            );
            return Err(ServerError::DbError(format!(
                "room {room_id} has a booking whose check-out is not after check-in"
            )));
        }
    }

    Ok(room)
}

/// Every stored room document for the hotel, in room id order.
pub fn load_rooms(conn: &Connection, hotel_id: &str) -> Result<Vec<Room>, ServerError> {
    let mut stmt = conn
        .prepare("select room_id, doc from room_docs where hotel_id = ? order by room_id")
        .map_err(|e| ServerError::DbError(format!("prepare load rooms failed: {e}")))?;

    let docs = stmt
        .query_map(params![hotel_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| ServerError::DbError(format!("load rooms failed: {e}")))?;

    let mut rooms = Vec::new();
    for doc in docs {
        let (room_id, doc) = doc.map_err(|e| ServerError::DbError(e.to_string()))?;
        rooms.push(decode_room(hotel_id, &room_id, &doc)?);
    }
    Ok(rooms)
}

pub fn find_room(conn: &Connection, hotel_id: &str, room_id: &str) -> Result<Option<Room>, ServerError> {
    let doc: Option<String> = conn
        .query_row(
            "select doc from room_docs where hotel_id = ? and room_id = ?",
            params![hotel_id, room_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("find room failed: {e}")))?;

    match doc {
        Some(doc) => Ok(Some(decode_room(hotel_id, room_id, &doc)?)),
        None => Ok(None),
    }
}

/// Merges stored documents onto the fixed roster. Roster order and names win;
/// documents for rooms no longer on the roster are ignored.
pub fn rooms_for_roster(
    conn: &Connection,
    hotel_id: &str,
    roster: &[RosterEntry],
) -> Result<Vec<Room>, ServerError> {
    let mut stored = load_rooms(conn, hotel_id)?;

    Ok(roster
        .iter()
        .map(|entry| {
            let doc = stored
                .iter()
                .position(|r| r.id == entry.id)
                .map(|i| stored.swap_remove(i));

            match doc {
                Some(room) => Room {
                    name: entry.name.clone(),
                    ..room
                },
                None => Room::empty(&entry.id, &entry.name),
            }
        })
        .collect())
}

/// The roster room merged with its stored document, if any.
pub fn room_for_entry(conn: &Connection, hotel_id: &str, entry: &RosterEntry) -> Result<Room, ServerError> {
    Ok(match find_room(conn, hotel_id, &entry.id)? {
        Some(room) => Room {
            name: entry.name.clone(),
            ..room
        },
        None => Room::empty(&entry.id, &entry.name),
    })
}

/// Applies a partial update to a room document, creating it if needed.
/// Concurrent writers are not coordinated: the last write wins.
pub fn update_room(
    conn: &Connection,
    hotel_id: &str,
    entry: &RosterEntry,
    patch: RoomPatch,
) -> Result<Room, ServerError> {
    if patch.room_id != entry.id {
        return Err(ServerError::BadRequest(format!(
            "patch for room {} sent to room {}",
            patch.room_id, entry.id
        )));
    }

    let mut room = room_for_entry(conn, hotel_id, entry)?;
    patch.apply(&mut room);

    let doc = serde_json::to_string(&room)?;
    let now = Utc::now().timestamp();

    conn.execute(
        r#"
        insert into room_docs (hotel_id, room_id, doc, updated_at)
        values (?, ?, ?, ?)
        on conflict (hotel_id, room_id) do update set doc = excluded.doc, updated_at = excluded.updated_at
        "#,
        params![hotel_id, room.id, doc, now],
    )
    .map_err(|e| ServerError::DbError(format!("update room failed: {e}")))?;

    tracing::info!(hotel_id, room_id = %room.id, "room document written");
    Ok(room)
}
