pub mod api;
pub mod config;
pub mod data_structures;
pub mod error;

use crate::data_structures::AppState;
use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use stockdash::{api::Dashboard, services::CsvDataService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // Global span with node_name for all subsequent logs
    let _span = tracing::info_span!("node", name = %app_config.node_name).entered();

    tracing::info!("Starting stock-dashboard");
    tracing::info!(
        environment = %app_config.environment,
        port = app_config.port,
        data_file = %app_config.data_file.display(),
        "Loaded configuration"
    );

    // A table that cannot be loaded aborts startup
    let table = CsvDataService::new()
        .load(&app_config.data_file)
        .with_context(|| format!("failed to load price table {}", app_config.data_file.display()))?;
    let dashboard = Dashboard::new(table)?.with_ticker(app_config.ticker.clone());

    let controls = dashboard.controls();
    tracing::info!(
        rows = dashboard.table().len(),
        years = ?controls.years,
        weekdays = ?controls.weekdays,
        "Price table ready"
    );

    let app_state = AppState {
        dashboard: Arc::new(dashboard),
        node_name: Arc::new(app_config.node_name.clone()),
    };

    let app = api::router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], app_config.port));
    tracing::info!(%addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
