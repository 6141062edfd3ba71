//! SQLite repository implementation.
//!
//! Implements [`NoteRepository`] from `notes_core::storage` using SQLite.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use notes_core::note::{NewNote, Note};
use notes_core::storage::{NoteRepository, RepositoryError, Result};

use super::conversions::row_to_note;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Holds only the location of the database file. Each operation opens a
/// connection, runs a single statement and drops the connection when it
/// goes out of scope, on success and error paths alike.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    path: PathBuf,
}

impl SqliteRepository {
    /// Creates a new repository backed by the file at `path`.
    ///
    /// The database file will be created if it doesn't exist and the schema
    /// is initialized, so an unusable store is reported here rather than on
    /// the first request.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let repo = Self { path: path.into() };
        repo.ensure_schema().await?;

        tracing::debug!(path = %repo.path().display(), "SQLite store ready");

        Ok(repo)
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection to the database file.
    async fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path).await.map_err(|e| {
            RepositoryError::StorageUnavailable(format!(
                "Cannot open {}: {e}",
                self.path.display()
            ))
        })
    }

    /// Runs `function` on a fresh connection and closes it before returning.
    ///
    /// The connection is closed whether or not `function` succeeded. When
    /// both fail, the error from `function` wins.
    async fn with_connection<F, R>(&self, function: F) -> Result<R>
    where
        F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let conn = self.connect().await?;

        let result = conn.call(function).await.map_err(map_tokio_rusqlite_error);
        let closed = conn.close().await.map_err(map_tokio_rusqlite_error);

        let value = result?;
        closed?;
        Ok(value)
    }
}

#[async_trait]
impl NoteRepository for SqliteRepository {
    async fn ensure_schema(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
    }

    async fn list_notes(&self) -> Result<Vec<Note>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(schema::SELECT_NOTES).map_err(wrap_err)?;
            let rows = stmt.query_map([], row_to_note).map_err(wrap_err)?;

            let mut notes = Vec::new();
            for row_result in rows {
                notes.push(row_result.map_err(wrap_err)?);
            }
            Ok(notes)
        })
        .await
    }

    async fn insert_note(&self, note: &NewNote) -> Result<i64> {
        let title = note.title().to_string();
        let content = note.content().to_string();

        self.with_connection(move |conn| {
            conn.execute(schema::INSERT_NOTE, rusqlite::params![title, content])
                .map_err(wrap_err)?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    async fn delete_note(&self, id: i64) -> Result<bool> {
        let removed = self
            .with_connection(move |conn| {
                conn.execute(schema::DELETE_NOTE, [id])
                    .map_err(wrap_err)
            })
            .await?;

        Ok(removed > 0)
    }
}
