// visiongate - HTTP gateway for Azure Computer Vision image analysis

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;
use visiongate::cli::Args;
use visiongate::config::AppConfig;
use visiongate::server::create_router;
use visiongate::utils::logging;
use visiongate::vision::VisionClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load()?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.require_credentials()?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting visiongate v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the shared vision client
    info!("Vision service endpoint: {}", config.azure.endpoint);
    let vision_client = VisionClient::new(&config.azure)?;

    // Phase 4: Build and start HTTP server
    let app = create_router(config.clone(), vision_client);
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
