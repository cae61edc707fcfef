use std::sync::Arc;

use anyhow::Context;
use tmdb_addon_metadata::service::MetaService;
use tmdb_addon_metadata::tmdb::TmdbClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = tmdb_addon_server::config::ServerConfig::from_env()
        .context("failed to load configuration")?;
    let provider = Arc::new(TmdbClient::new(config.tmdb.clone()));
    let app_state = tmdb_addon_server::state::AppState {
        service: MetaService::new(provider),
        cache: config.cache,
    };
    info!(
        provider = app_state.service.provider_name(),
        base_url = %config.tmdb.base_url,
        language = %config.tmdb.language,
        "metadata provider configured"
    );

    let app = tmdb_addon_server::routes::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .context("failed to bind")?;
    info!(addr = %config.bind, "server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
