use crate::{
    models::Note,
    repository::{NoteRepository, RepositoryError},
};

use std::sync::Arc;

const NOTE_ID_PREFIX: &str = "Note with ID";

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Enforces the note lifecycle rules in front of a [`NoteRepository`].
#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_notes(&self) -> Result<Vec<Note>, ServiceError> {
        tracing::info!("Fetching all notes from the repository");

        let notes = self.repo.find_all().await.inspect_err(|e| {
            tracing::error!("Error fetching all notes: {}", e);
        })?;

        tracing::info!("Fetched {} notes from the repository", notes.len());
        Ok(notes)
    }

    /// `Ok(None)` when no note has this id.
    pub async fn get_note_by_id(&self, id: i64) -> Result<Option<Note>, ServiceError> {
        tracing::info!("Fetching {} {} from the repository", NOTE_ID_PREFIX, id);

        let note = self.repo.find_by_id(id).await.inspect_err(|e| {
            tracing::error!("Error fetching note by ID {}: {}", id, e);
        })?;

        if note.is_some() {
            tracing::info!("{} {} found in the repository", NOTE_ID_PREFIX, id);
        } else {
            tracing::info!("{} {} not found in the repository", NOTE_ID_PREFIX, id);
        }

        Ok(note)
    }

    /// Rejects notes that already carry an id; the repository assigns one.
    pub async fn create_note(&self, note: Note) -> Result<Note, ServiceError> {
        tracing::info!("Creating a new note");

        if note.id.is_some() {
            let e = ServiceError::InvalidArgument(
                "ID must be absent for new note creation".to_string(),
            );
            tracing::error!("Error creating note: {}", e);
            return Err(e);
        }

        let created = self.repo.save(note).await.inspect_err(|e| {
            tracing::error!("Error creating note: {}", e);
        })?;

        tracing::info!("Created new note with ID: {:?}", created.id);
        Ok(created)
    }

    /// Full replace of an existing note. Any id in `note` is overwritten with `id`.
    pub async fn update_note(&self, id: i64, mut note: Note) -> Result<Note, ServiceError> {
        tracing::info!("Updating note with ID: {}", id);

        let exists = self.repo.exists_by_id(id).await.inspect_err(|e| {
            tracing::error!("Error updating note with ID {}: {}", id, e);
        })?;

        if !exists {
            let e = ServiceError::InvalidArgument(format!("{NOTE_ID_PREFIX} {id} does not exist"));
            tracing::error!("Error updating note with ID {}: {}", id, e);
            return Err(e);
        }

        note.id = Some(id);
        let updated = self.repo.save(note).await.inspect_err(|e| {
            tracing::error!("Error updating note with ID {}: {}", id, e);
        })?;

        tracing::info!("Updated note with ID: {}", id);
        Ok(updated)
    }

    /// Unknown ids are not reported; the call succeeds without effect.
    pub async fn delete_note_by_id(&self, id: i64) -> Result<(), ServiceError> {
        tracing::info!("Deleting note with ID: {}", id);

        self.repo.delete_by_id(id).await.inspect_err(|e| {
            tracing::error!("Error deleting note with ID {}: {}", id, e);
        })?;

        tracing::info!("Deleted note with ID: {}", id);
        Ok(())
    }
}
