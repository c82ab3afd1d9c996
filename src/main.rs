use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use streams::modules::streams::adapters::outbound::json_file_store::JsonFileStreamStore;
use streams::shell::config::AppConfig;
use streams::shell::graphql::GRAPHQL_PATH;
use streams::shell::http::router;
use streams::shell::seed::seed_demo_stream;
use streams::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let store = JsonFileStreamStore::open(&config.storage_path)
        .await
        .with_context(|| format!("opening stream store at {}", config.storage_path.display()))?;
    tracing::info!(path = %store.path().display(), "stream store ready");

    let state = AppState::new(Arc::new(store));
    seed_demo_stream(state.store.as_ref())
        .await
        .context("seeding demo stream")?;

    let app = router(state, &config.static_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("Ready on http://{}, GraphQL at {}", addr, GRAPHQL_PATH);
    axum::serve(listener, app).await?;
    Ok(())
}
