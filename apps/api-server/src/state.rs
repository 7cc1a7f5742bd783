//! Application state - shared across all handlers.

use std::sync::Arc;

use catalog_core::ContentService;
use catalog_core::ports::ContentStore;
use catalog_infra::InMemoryContentStore;

use crate::config::AppConfig;
use crate::observability::TracingContentObserver;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentService,
    /// Which store backs the service, reported by the health check.
    pub store_kind: &'static str,
}

impl AppState {
    /// Wrap a store in a traced content service.
    pub fn with_store(store: Arc<dyn ContentStore>, store_kind: &'static str) -> Self {
        Self {
            content: ContentService::new(store, Arc::new(TracingContentObserver)),
            store_kind,
        }
    }

    /// Build the application state, falling back to memory when no database is usable.
    pub async fn new(config: &AppConfig) -> Self {
        let state = match config.database.as_ref() {
            Some(db_config) => Self::connect(db_config).await,
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        tracing::info!(store = state.store_kind, "Application state initialized");
        state
    }

    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryContentStore::new()), "memory")
    }

    #[cfg(feature = "postgres")]
    async fn connect(db_config: &catalog_infra::DatabaseConfig) -> Self {
        use catalog_infra::PostgresContentStore;

        match catalog_infra::database::connect(db_config).await {
            Ok(conn) => Self::with_store(Arc::new(PostgresContentStore::new(conn)), "postgres"),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(_db_config: &catalog_infra::DatabaseConfig) -> Self {
        tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
        Self::in_memory()
    }
}
