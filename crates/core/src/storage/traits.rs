use async_trait::async_trait;

use crate::note::{NewNote, Note};

use super::Result;

/// Repository for note operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Creates the notes table if it does not exist yet.
    ///
    /// Idempotent: existing rows are left untouched.
    async fn ensure_schema(&self) -> Result<()>;

    /// Gets all notes, newest first.
    async fn list_notes(&self) -> Result<Vec<Note>>;

    /// Inserts a note and returns its newly assigned id.
    async fn insert_note(&self, note: &NewNote) -> Result<i64>;

    /// Deletes a note by its id.
    ///
    /// Returns whether a row was removed. Deleting an unknown id is a
    /// no-op and returns `false`, not an error.
    async fn delete_note(&self, id: i64) -> Result<bool>;
}
