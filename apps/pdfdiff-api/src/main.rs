//! PDF Diff API Server - Backend for visual document comparison
//!
//! Provides a REST endpoint that takes both extracted document versions and
//! returns the consolidated difference report.

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

use pdfdiff_api::app;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pdfdiff_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3002);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting PDF Diff API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await?;

    Ok(())
}
