mod error;
mod http_mapping;
mod requests;
mod types;

pub use error::NoteError;
pub use http_mapping::note_error_to_status_code;
pub use requests::CreateNoteRequest;
pub use types::{NewNote, Note};
