use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{instrument, warn};

use crate::state::AppState;

const MAX_LISTED_COLLECTIONS: usize = 10;

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub store_backend: &'static str,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(|| async { "ok" }))
        .route("/test", get(diagnostics))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Nutrition API is running" }))
}

/// Reports whether the document store answers. Always 200; failures are
/// described in the body.
#[instrument(skip(state))]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let database_url = if state.config.database_url.is_some() {
        "✅ Set"
    } else {
        "❌ Not Set"
    };

    let database_name = match state.config.database_name.as_deref() {
        Some(name) => format!("✅ {name}"),
        None => "❌ Not Set".to_string(),
    };

    let (database, connection_status, collections) = match state.store.list_collections().await {
        Ok(mut names) => {
            names.truncate(MAX_LISTED_COLLECTIONS);
            ("✅ Connected & Working".to_string(), "Connected", names)
        }
        Err(e) => {
            warn!(error = %e, "store diagnostics failed");
            let mut msg = e.to_string();
            msg.truncate(msg.char_indices().nth(50).map_or(msg.len(), |(i, _)| i));
            (format!("⚠️  Connected but Error: {msg}"), "Error", Vec::new())
        }
    };

    Json(DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database,
        store_backend: state.store.backend(),
        database_url: database_url.to_string(),
        database_name,
        connection_status: connection_status.to_string(),
        collections,
    })
}
