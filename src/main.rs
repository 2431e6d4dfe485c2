mod config;
mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use std::sync::Arc;

use config::StorageConfig;
use handlers::rest;
use repository::{InMemoryNoteRepository, NoteRepository, PostgresNoteRepository};
use service::NoteService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to load config: {e}");
    });

    // Repository creation and migration
    let repo: Arc<dyn NoteRepository> = match cfg.storage {
        StorageConfig::Postgres { dsn } => {
            let mut repo = PostgresNoteRepository::new(&dsn).await.unwrap_or_else(|e| {
                tracing::error!("Failed to establish database connection: {e}");
                panic!("failed to establish database connection: {e}");
            });

            repo.migrate().await.unwrap_or_else(|e| {
                tracing::error!("Failed to migrate database: {e}");
                panic!("failed to migrate database: {e}");
            });

            Arc::new(repo)
        }
        StorageConfig::Memory => {
            tracing::warn!("Using in-memory storage, notes will not survive a restart");
            Arc::new(InMemoryNoteRepository::new())
        }
    };

    // Service creation
    let service = Arc::new(NoteService::new(repo));

    // Router config
    let router = rest::router(service);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to port {}: {e}", cfg.port);
            panic!("failed to bind to port {}: {e}", cfg.port);
        });

    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Note service starting, listening on {}", addr);
    }

    axum::serve(listener, router)
        .await
        .expect("failed to start server");
}
