//! Application state.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is reached through a repository trait object.

use std::sync::Arc;

use notes_core::storage::{NoteRepository, Result};

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// Cloned for each request handler. Holds no connection, only the
/// repository that knows where the store lives.
#[derive(Clone)]
pub struct AppState {
    /// Note repository.
    pub note_repo: Arc<dyn NoteRepository>,
}

impl AppState {
    /// Creates a new AppState with the given repository.
    pub fn new(note_repo: Arc<dyn NoteRepository>) -> Self {
        Self { note_repo }
    }

    /// Creates an AppState backed by the SQLite file named in `config`.
    ///
    /// Initializes the schema, so a store that cannot be opened fails here.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let repo = SqliteRepository::new(config.database_path.clone()).await?;
        Ok(Self::new(Arc::new(repo)))
    }
}
