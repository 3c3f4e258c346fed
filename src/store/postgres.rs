use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, types::Json, FromRow, PgPool};
use tracing::{debug, info};
use uuid::Uuid;

use super::{normalize_filter, DocumentStore, StoredDocument};
use crate::error::StoreError;

/// Documents stored as JSONB rows of a single `documents` table, keyed by
/// collection name.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Value>,
}

impl From<DocumentRow> for StoredDocument {
    fn from(r: DocumentRow) -> Self {
        Self {
            id: r.id.to_string(),
            body: r.body.0,
        }
    }
}

impl PgDocumentStore {
    /// Connects and brings the `documents` table up to date.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("connect to database")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("run migrations")?;

        info!(max_connections, "postgres document store ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn create_document(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id)
        .bind(collection)
        .bind(Json(document))
        .execute(&self.pool)
        .await?;
        debug!(%id, collection, "document inserted");
        Ok(id.to_string())
    }

    async fn get_documents(
        &self,
        collection: &str,
        name_filter: Option<&str>,
        limit: i64,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1
              AND ($2::text IS NULL OR strpos(lower(body->>'name'), lower($2)) > 0)
            LIMIT $3
            "#,
        )
        .bind(collection)
        .bind(normalize_filter(name_filter))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(StoredDocument::from).collect())
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar::<_, String>(
            r#"SELECT DISTINCT collection FROM documents ORDER BY collection"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("postgres document store closed");
    }
}
