use async_trait::async_trait;
use tokio_postgres::{Client, NoTls, Row};

use super::{NoteRepository, RepositoryError, embedded::migrations};
use crate::models::Note;

pub struct PostgresNoteRepository {
    client: Client,
}

impl PostgresNoteRepository {
    pub async fn new(database_dsn: &str) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: Some(row.get("id")),
        title: row.get("title"),
        content: row.get("content"),
    }
}

#[async_trait]
impl NoteRepository for PostgresNoteRepository {
    async fn find_all(&self) -> Result<Vec<Note>, RepositoryError> {
        let rows = self
            .client
            .query("SELECT id, title, content FROM notes", &[])
            .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, RepositoryError> {
        let row = self
            .client
            .query_opt("SELECT id, title, content FROM notes WHERE id = $1", &[&id])
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let row = self
            .client
            .query_one("SELECT EXISTS(SELECT 1 FROM notes WHERE id = $1)", &[&id])
            .await?;

        Ok(row.get(0))
    }

    async fn save(&self, note: Note) -> Result<Note, RepositoryError> {
        let row = match note.id {
            None => {
                self.client
                    .query_one(
                        "INSERT INTO notes (title, content) VALUES ($1, $2) \
                         RETURNING id, title, content",
                        &[&note.title, &note.content],
                    )
                    .await?
            }
            Some(id) => {
                self.client
                    .query_one(
                        "INSERT INTO notes (id, title, content) VALUES ($1, $2, $3) \
                         ON CONFLICT (id) DO UPDATE \
                         SET title = EXCLUDED.title, content = EXCLUDED.content \
                         RETURNING id, title, content",
                        &[&id, &note.title, &note.content],
                    )
                    .await?
            }
        };

        Ok(note_from_row(&row))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let rows = self
            .client
            .execute("DELETE FROM notes WHERE id = $1", &[&id])
            .await?;

        if rows == 0 {
            tracing::debug!("no note with id {} to delete", id);
        }

        Ok(())
    }
}
