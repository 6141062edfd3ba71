//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! Columns are read by name, so the SELECT column order does not matter.

use chrono::NaiveDateTime;
use notes_core::note::Note;
use rusqlite::Row;

/// Format produced by SQLite's `CURRENT_TIMESTAMP`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a SQLite row to a Note.
///
/// Expected columns: id, title, content, created_at
pub fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    let created_at: String = row.get("created_at")?;

    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        created_at: parse_timestamp(&created_at)?,
    })
}

/// Parse a timestamp written by `CURRENT_TIMESTAMP` (UTC, `YYYY-MM-DD HH:MM:SS`).
fn parse_timestamp(s: &str) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Format a timestamp the way SQLite stores it.
#[cfg(test)]
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}
