//! Pure function for mapping note errors to HTTP status codes.

use super::NoteError;

/// Maps a [`NoteError`] to an HTTP status code.
///
/// Every variant is a caller error, so all of them map to 400 (Bad Request).
///
/// # Examples
///
/// ```
/// use notes_core::note::{note_error_to_status_code, NoteError};
///
/// let error = NoteError::MissingField("content");
/// assert_eq!(note_error_to_status_code(&error), 400);
/// ```
pub fn note_error_to_status_code(error: &NoteError) -> u16 {
    match error {
        NoteError::MissingField(_) => 400,
        NoteError::InvalidForm(_) => 400,
        NoteError::InvalidId(_) => 400,
    }
}
