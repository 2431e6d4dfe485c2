use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{NoteRepository, RepositoryError};
use crate::models::Note;

struct Store {
    notes: BTreeMap<i64, Note>,
    next_id: i64,
}

/// Process-local storage engine. Ids start at 1 and are never reused.
pub struct InMemoryNoteRepository {
    store: RwLock<Store>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    fn starting_at(next_id: i64) -> Self {
        Self {
            store: RwLock::new(Store {
                notes: BTreeMap::new(),
                next_id,
            }),
        }
    }
}

impl Default for InMemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn find_all(&self) -> Result<Vec<Note>, RepositoryError> {
        Ok(self.store.read().await.notes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, RepositoryError> {
        Ok(self.store.read().await.notes.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.store.read().await.notes.contains_key(&id))
    }

    async fn save(&self, mut note: Note) -> Result<Note, RepositoryError> {
        let mut store = self.store.write().await;

        let id = match note.id {
            Some(id) => {
                // keep the counter ahead of ids written explicitly
                if id >= store.next_id {
                    store.next_id = id.checked_add(1).ok_or(RepositoryError::IdSpaceExhausted)?;
                }
                id
            }
            None => {
                let id = store.next_id;
                store.next_id = id.checked_add(1).ok_or(RepositoryError::IdSpaceExhausted)?;
                id
            }
        };

        note.id = Some(id);
        store.notes.insert(id, note.clone());

        Ok(note)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.store.write().await.notes.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let repo = InMemoryNoteRepository::new();

        let first = repo.save(Note::new("a", "")).await.unwrap();
        let second = repo.save(Note::new("b", "")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn save_with_id_replaces_all_fields() {
        let repo = InMemoryNoteRepository::new();
        let stored = repo.save(Note::new("a", "body")).await.unwrap();

        let replaced = repo.save(Note::new("b", "").with_id(1)).await.unwrap();

        assert_eq!(replaced, Note::new("b", "").with_id(1));
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(replaced));
        assert_ne!(repo.find_by_id(1).await.unwrap(), Some(stored));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn explicit_ids_are_not_handed_out_again() {
        let repo = InMemoryNoteRepository::new();
        repo.save(Note::new("x", "").with_id(10)).await.unwrap();

        let next = repo.save(Note::new("y", "")).await.unwrap();

        assert_eq!(next.id, Some(11));
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let repo = InMemoryNoteRepository::new();
        let note = repo.save(Note::new("a", "")).await.unwrap();
        repo.delete_by_id(1).await.unwrap();

        let next = repo.save(Note::new("a", "")).await.unwrap();

        assert_ne!(next.id, note.id);
        assert!(!repo.exists_by_id(1).await.unwrap());
    }

    #[tokio::test]
    async fn deleting_unknown_id_is_a_no_op() {
        let repo = InMemoryNoteRepository::new();
        repo.save(Note::new("a", "")).await.unwrap();

        repo.delete_by_id(42).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn exhausted_counter_is_reported() {
        let repo = InMemoryNoteRepository::starting_at(i64::MAX);

        let err = repo.save(Note::new("a", "")).await.unwrap_err();

        assert!(matches!(err, RepositoryError::IdSpaceExhausted));
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
