use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Note;

/// Wire representation of a note, used for both requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteDto {
    /// Note ID. Must be absent on create; ignored on update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Note title
    #[serde(default)]
    pub title: String,
    /// Note content
    #[serde(default)]
    pub content: String,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
        }
    }
}

impl From<NoteDto> for Note {
    fn from(dto: NoteDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            content: dto.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let dto: NoteDto = serde_json::from_str(r#"{"title":"A"}"#).unwrap();

        assert_eq!(dto.id, None);
        assert_eq!(dto.title, "A");
        assert_eq!(dto.content, "");
    }

    #[test]
    fn absent_id_is_not_serialized() {
        let json = serde_json::to_value(NoteDto::from(Note::new("t", "c"))).unwrap();

        assert_eq!(json, serde_json::json!({"title": "t", "content": "c"}));
    }
}
