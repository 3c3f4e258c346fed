use crate::config::AppConfig;
use crate::store::{DocumentStore, MemoryDocumentStore, PgDocumentStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store = match config.database_url.as_deref() {
            Some(url) => Arc::new(PgDocumentStore::connect(url, config.max_connections).await?)
                as Arc<dyn DocumentStore>,
            None => {
                tracing::warn!("DATABASE_URL not set; documents are kept in memory only");
                Arc::new(MemoryDocumentStore::new()) as Arc<dyn DocumentStore>
            }
        };

        Ok(Self::from_parts(store, config))
    }

    pub fn from_parts(store: Arc<dyn DocumentStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    /// Memory-backed state with default config.
    #[cfg(test)]
    pub fn fake() -> Self {
        Self::from_parts(
            Arc::new(MemoryDocumentStore::new()),
            Arc::new(AppConfig::default()),
        )
    }
}
