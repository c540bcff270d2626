mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use infrastructure::axum_handler::{build_cors_layer, router, AppState};
use infrastructure::config::AppConfig;
use infrastructure::error::InfrastructureError;
use infrastructure::in_memory_logo_service::InMemoryLogoService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(InfrastructureError::from)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    if let Some(path) = AppConfig::override_path() {
        tracing::info!("Loaded logo config from {}", path);
    }

    // サービスの組み立て。永続化が必要になったらここで差し替える
    let logo_service = Arc::new(InMemoryLogoService::new(
        config.fonts.clone(),
        config.history.max_entries,
    ));
    let state = Arc::new(AppState::new(logo_service));
    let app = router(state, build_cors_layer(&config.cors)?);

    let address = config.bind_address();
    let addr: SocketAddr = address
        .parse()
        .map_err(|source| InfrastructureError::InvalidBindAddress {
            address: address.clone(),
            source,
        })?;

    // サーバーの開始
    tracing::info!("Logo service listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Logo service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
