//! Request payloads for note operations.
//!
//! These are pure data types with no I/O. Fields are optional at the
//! deserialization layer so that a missing key becomes a typed
//! [`NoteError`] instead of an opaque extractor rejection.

use serde::{Deserialize, Serialize};

use super::{NewNote, NoteError};

/// Form body for creating a note (`POST /add`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CreateNoteRequest {
    /// Create a request with both fields set.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Validate the required fields and convert into a [`NewNote`].
    pub fn into_new_note(self) -> Result<NewNote, NoteError> {
        let title = self.title.ok_or(NoteError::MissingField("title"))?;
        let content = self.content.ok_or(NoteError::MissingField("content"))?;

        NewNote::new(title, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_note_request_into_new_note() {
        let note = CreateNoteRequest::new("Groceries", "Milk, eggs")
            .into_new_note()
            .unwrap();

        assert_eq!(note.title(), "Groceries");
        assert_eq!(note.content(), "Milk, eggs");
    }

    #[test]
    fn test_missing_title() {
        let req = CreateNoteRequest {
            title: None,
            content: Some("body".to_string()),
        };

        assert_eq!(req.into_new_note(), Err(NoteError::MissingField("title")));
    }

    #[test]
    fn test_missing_content() {
        let req = CreateNoteRequest {
            title: Some("title".to_string()),
            content: None,
        };

        assert_eq!(req.into_new_note(), Err(NoteError::MissingField("content")));
    }

    #[test]
    fn test_empty_request_reports_title_first() {
        let req = CreateNoteRequest::default();
        assert_eq!(req.into_new_note(), Err(NoteError::MissingField("title")));
    }

    #[test]
    fn test_empty_string_is_missing() {
        let req = CreateNoteRequest::new("title", "");
        assert_eq!(req.into_new_note(), Err(NoteError::MissingField("content")));
    }
}
