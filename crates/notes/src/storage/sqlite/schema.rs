//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the notes table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#;

pub const INSERT_NOTE: &str = r#"
INSERT INTO notes (title, content)
VALUES (?1, ?2)
"#;

// `created_at` has one-second resolution, `id` breaks ties.
pub const SELECT_NOTES: &str = r#"
SELECT id, title, content, created_at
FROM notes
ORDER BY created_at DESC, id DESC
"#;

pub const DELETE_NOTE: &str = r#"
DELETE FROM notes
WHERE id = ?1
"#;
