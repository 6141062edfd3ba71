use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::NoteError;

/// A persisted note.
///
/// `id` and `created_at` are assigned by the store on insertion and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// UTC creation time, second resolution.
    pub created_at: NaiveDateTime,
}

/// A validated note that is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    title: String,
    content: String,
}

impl NewNote {
    /// Create a new note payload.
    ///
    /// Fails with [`NoteError::MissingField`] when either value is empty.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, NoteError> {
        let title = title.into();
        let content = content.into();

        if title.is_empty() {
            return Err(NoteError::MissingField("title"));
        }
        if content.is_empty() {
            return Err(NoteError::MissingField("content"));
        }

        Ok(Self { title, content })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_keeps_values() {
        let note = NewNote::new("Groceries", "Milk, eggs").unwrap();

        assert_eq!(note.title(), "Groceries");
        assert_eq!(note.content(), "Milk, eggs");
    }

    #[test]
    fn test_new_note_rejects_empty_title() {
        let result = NewNote::new("", "body");
        assert_eq!(result, Err(NoteError::MissingField("title")));
    }

    #[test]
    fn test_new_note_rejects_empty_content() {
        let result = NewNote::new("title", "");
        assert_eq!(result, Err(NoteError::MissingField("content")));
    }

    #[test]
    fn test_new_note_accepts_markup_verbatim() {
        // Escaping happens at render time, values are stored as given.
        let note = NewNote::new("<b>bold</b>", "a & b").unwrap();
        assert_eq!(note.title(), "<b>bold</b>");
        assert_eq!(note.content(), "a & b");
    }
}
