//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The services hold repository trait objects, so the
//! storage backend is chosen once here at startup.

use std::sync::Arc;

use scheduleflow_core::storage::{PartnerContactRepository, PartnerRepository};

use crate::config::{Config, StorageBackend};
use crate::services::{PartnerContactService, PartnerService};
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub partners: PartnerService,
    pub contacts: PartnerContactService,
}

impl AppState {
    /// Creates AppState from one store that implements both repositories.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: PartnerRepository + PartnerContactRepository + 'static,
    {
        Self {
            partners: PartnerService::new(repo.clone()),
            contacts: PartnerContactService::new(repo.clone(), repo),
        }
    }

    /// Creates AppState with an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::from_repository(Arc::new(InMemoryRepository::new()))
    }

    /// Creates AppState with the backend selected in `config`.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        match config.storage_backend {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Ok(Self::in_memory())
            }
            StorageBackend::Sqlite => Self::sqlite(config).await,
        }
    }

    #[cfg(feature = "sqlite")]
    async fn sqlite(config: &Config) -> Result<Self, anyhow::Error> {
        use crate::storage::SqliteRepository;

        tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
        let repo = SqliteRepository::new(&config.sqlite_path).await?;
        Ok(Self::from_repository(Arc::new(repo)))
    }

    #[cfg(not(feature = "sqlite"))]
    async fn sqlite(_config: &Config) -> Result<Self, anyhow::Error> {
        anyhow::bail!("SQLite storage requested but the 'sqlite' feature is disabled; set STORAGE_BACKEND=memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_from_config() {
        let config = Config {
            storage_backend: StorageBackend::Memory,
            sqlite_path: "unused.db".to_string(),
            request_timeout_seconds: 10,
        };

        let state = AppState::new(&config).await.unwrap();

        assert_eq!(state.partners.count().await.unwrap(), 0);
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_sqlite_backend_from_config() {
        let config = Config {
            storage_backend: StorageBackend::Sqlite,
            sqlite_path: ":memory:".to_string(),
            request_timeout_seconds: 10,
        };

        let state = AppState::new(&config).await.unwrap();

        assert_eq!(state.partners.count().await.unwrap(), 0);
    }
}
