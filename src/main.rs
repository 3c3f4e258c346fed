mod app;
mod config;
mod error;
mod foods;
mod health;
mod meals;
mod nutrition;
mod pagination;
mod state;
mod store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "macrotrack=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = state::AppState::init().await?;
    let store = app_state.store.clone();
    let config = app_state.config.clone();
    tracing::info!(store = store.backend(), "document store initialised");

    let result = app::serve(app::build_app(app_state), &config).await;

    store.close().await;
    result
}
