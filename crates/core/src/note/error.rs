use thiserror::Error;

/// Errors raised while turning a request into a note operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid form body: {0}")]
    InvalidForm(String),
    #[error("Invalid note id: {0}")]
    InvalidId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        assert_eq!(
            NoteError::MissingField("title").to_string(),
            "Missing required field: title"
        );
    }

    #[test]
    fn test_invalid_id_display() {
        assert_eq!(
            NoteError::InvalidId("abc".to_string()).to_string(),
            "Invalid note id: abc"
        );
    }

    #[test]
    fn test_invalid_form_display() {
        assert_eq!(
            NoteError::InvalidForm("unexpected content type".to_string()).to_string(),
            "Invalid form body: unexpected content type"
        );
    }
}
