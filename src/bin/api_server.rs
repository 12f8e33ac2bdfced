// API server entry point.
//
// Usage: cargo run --features api --bin api_server

use std::net::SocketAddr;

use evc_garden::geocode::DEFAULT_NOMINATIM_URL;
use evc_garden::lookup_log::DEFAULT_FORM_URL;
use evc_garden::wfs::DEFAULT_WFS_URL;
use evc_garden::{create_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // Default log level: info for our crate, warn for others
                "evc_garden=info,tower_http=debug,axum=debug,warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let curated_plants =
        std::env::var("CURATED_PLANTS").unwrap_or_else(|_| "curated-plants.json".to_string());

    let wfs_url = std::env::var("WFS_URL").unwrap_or_else(|_| DEFAULT_WFS_URL.to_string());

    let nominatim_url =
        std::env::var("NOMINATIM_URL").unwrap_or_else(|_| DEFAULT_NOMINATIM_URL.to_string());

    // Set LOOKUP_LOG_URL to an empty string to disable lead capture
    let lookup_log_url = match std::env::var("LOOKUP_LOG_URL") {
        Ok(url) if url.is_empty() => None,
        Ok(url) => Some(url),
        Err(_) => Some(DEFAULT_FORM_URL.to_string()),
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  CURATED_PLANTS: {}", curated_plants);
    tracing::info!("  WFS_URL: {}", wfs_url);
    tracing::info!("  NOMINATIM_URL: {}", nominatim_url);
    tracing::info!("  LEAD_CAPTURE: {}", lookup_log_url.is_some());
    tracing::info!("  PORT: {}", port);

    // Initialize application state (loads the curated dataset)
    let state = AppState::new(
        &curated_plants,
        &wfs_url,
        &nominatim_url,
        lookup_log_url.as_deref(),
    )?;
    tracing::info!("Application state initialized successfully");

    // Create router with all endpoints and middleware
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
