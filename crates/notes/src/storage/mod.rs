//! Storage backend implementation.
//!
//! Provides the SQLite implementation of the [`notes_core::storage::NoteRepository`]
//! trait. The database is a single file; every operation opens its own
//! connection and releases it before returning.

pub mod sqlite;

pub use sqlite::SqliteRepository;
