// Main entry point - Dependency injection and server setup
use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use order_ops_dashboard::application::dashboard_service::DashboardService;
use order_ops_dashboard::application::selection_service::SelectionService;
use order_ops_dashboard::infrastructure::catalog_repository::StaticWidgetRepository;
use order_ops_dashboard::infrastructure::config::load_server_config;
use order_ops_dashboard::presentation::{self, app_state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_server_config().context("Failed to load server configuration")?;

    // Datasets are fixed for the lifetime of the process
    let repository = Arc::new(
        StaticWidgetRepository::load(&config.dashboard.widgets_path)
            .context("Failed to load widget catalog")?,
    );

    let selection_service = SelectionService::new(config.dashboard.default_region);
    let dashboard_service = DashboardService::new(repository, config.dashboard.clone());

    let state = Arc::new(AppState {
        dashboard_service,
        selection_service,
    });

    let router = presentation::router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Starting order-ops-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutting down");
}
