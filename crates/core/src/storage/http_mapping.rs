//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `StorageUnavailable` -> 503 (Service Unavailable)
/// - `ConstraintViolation` -> 400 (Bad Request)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use notes_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::StorageUnavailable("cannot open notes.db".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::StorageUnavailable(_) => 503,
        RepositoryError::ConstraintViolation(_) => 400,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}
