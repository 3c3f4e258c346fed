use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{normalize_filter, DocumentStore, StoredDocument};
use crate::error::StoreError;

/// In-process backend. Documents are kept in insertion order per collection
/// and lost when the process exits.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_contains(body: &Value, needle_lower: &str) -> bool {
    body.get("name")
        .and_then(Value::as_str)
        .map(|name| name.to_lowercase().contains(needle_lower))
        .unwrap_or(false)
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create_document(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.clone(),
                body: document,
            });
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        name_filter: Option<&str>,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let take = usize::try_from(limit).unwrap_or(0);
        let needle = normalize_filter(name_filter).map(str::to_lowercase);
        let guard = self.collections.read().await;
        let Some(docs) = guard.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .iter()
            .filter(|d| needle.as_deref().map_or(true, |n| name_contains(&d.body, n)))
            .take(take)
            .cloned()
            .collect())
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}
