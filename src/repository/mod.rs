mod embedded;
mod memory;
mod postgres;

pub use memory::InMemoryNoteRepository;
pub use postgres::PostgresNoteRepository;

use async_trait::async_trait;

use crate::models::Note;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("note id space exhausted")]
    IdSpaceExhausted,
}

/// Persistence operations the note service relies on.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// All stored notes, in whatever order the engine yields them.
    async fn find_all(&self) -> Result<Vec<Note>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, RepositoryError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Inserts the note when `note.id` is `None` and assigns a fresh id,
    /// otherwise replaces every field of the note stored under that id.
    async fn save(&self, note: Note) -> Result<Note, RepositoryError>;

    /// Removing an unknown id is a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
