use std::sync::Arc;

use bf_service::{Server, config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!("Starting bellman-ford server");
    tracing::info!("  Bind address: {}", config.server.bind_address());
    tracing::info!("  Listen backlog: {}", config.server.backlog);
    tracing::info!(
        "  Read buffer: {} bytes, request limit: {} bytes",
        config.server.read_buffer_size,
        config.server.max_request_bytes
    );
    tracing::info!(
        "  Edge policy: {:?}, vertex limit: {}",
        config.protocol.edge_policy,
        config.protocol.max_vertices
    );

    let server = Arc::new(Server::new(config));

    let shutdown_server = server.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received shutdown signal, stopping server...");
            shutdown_server.shutdown();
        }
    });

    server.run().await?;

    tracing::info!("Server stopped");
    Ok(())
}
