//! Document store gateway.
//!
//! Collections hold schemaless JSON documents. Identifiers are assigned by the
//! backend and always leave the gateway as plain strings.

mod memory;
mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;

pub const FOOD_COLLECTION: &str = "food";
pub const MEAL_COLLECTION: &str = "meal";

/// A raw document as returned by a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub body: Value,
}

/// A typed document together with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: String,
    #[serde(flatten)]
    pub doc: T,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend label for diagnostics.
    fn backend(&self) -> &'static str;

    async fn create_document(&self, collection: &str, document: Value) -> Result<String, StoreError>;

    /// Up to `limit` documents, optionally only those whose `name` contains
    /// `name_filter` ignoring case. No ordering is imposed.
    async fn get_documents(
        &self,
        collection: &str,
        name_filter: Option<&str>,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;

    async fn close(&self) {}
}

/// Serializes `doc` and stores it in `collection`.
pub async fn insert<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    doc: &T,
) -> Result<String, StoreError> {
    let value = serde_json::to_value(doc)?;
    store.create_document(collection, value).await
}

/// Fetches documents and decodes each into `T`.
pub async fn find<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    name_filter: Option<&str>,
    limit: i64,
) -> Result<Vec<Record<T>>, StoreError> {
    store
        .get_documents(collection, name_filter, limit)
        .await?
        .into_iter()
        .map(|d| decode(collection, d))
        .collect()
}

fn decode<T: DeserializeOwned>(collection: &str, d: StoredDocument) -> Result<Record<T>, StoreError> {
    let doc = serde_json::from_value(d.body).map_err(|source| StoreError::Decode {
        collection: collection.to_string(),
        id: d.id.clone(),
        source,
    })?;
    Ok(Record { id: d.id, doc })
}

/// Blank filters mean "no filter".
pub(crate) fn normalize_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| !f.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Named {
        name: String,
        n: u32,
    }

    #[test]
    fn record_serializes_id_next_to_fields() {
        let rec = Record {
            id: "abc".to_string(),
            doc: Named {
                name: "Oats".into(),
                n: 3,
            },
        };
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v, json!({"id": "abc", "name": "Oats", "n": 3}));
    }

    #[test]
    fn empty_filter_is_none() {
        assert_eq!(normalize_filter(Some("")), None);
        assert_eq!(normalize_filter(Some("ri")), Some("ri"));
        assert_eq!(normalize_filter(None), None);
    }

    #[tokio::test]
    async fn typed_insert_and_find() {
        let store = MemoryDocumentStore::new();
        let id = insert(&store, "things", &Named { name: "Oats".into(), n: 1 })
            .await
            .unwrap();

        let found: Vec<Record<Named>> = find(&store, "things", None, 10).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);
        assert_eq!(found[0].doc.name, "Oats");
    }

    #[tokio::test]
    async fn find_reports_undecodable_documents() {
        let store = MemoryDocumentStore::new();
        store
            .create_document("things", json!({"name": "no number"}))
            .await
            .unwrap();

        let err = find::<Named>(&store, "things", None, 10).await.unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }
}
