//! # Courier Node
//!
//! Route planning node binary with API server.

use courier_node::{create_router, AppState, NodeConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Run the Courier node server.
pub async fn run_server(config: NodeConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Courier node starting...");

    // Create shared application state
    let state = AppState::with_config(config.planner.clone());

    // Build the router
    let app = create_router(state);

    info!("Listening on http://{}", config.bind_addr);

    // Start the server
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = NodeConfig::from_env()?;
    run_server(config).await
}
