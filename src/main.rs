mod config;
mod insights;
mod models;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("lernhilfe_backend=debug,tower_http=debug")
        .init();

    // Load configuration - explicit path first, then the local conf.yaml,
    // then built-in defaults. Only the PORT variable is required to be
    // honored, so a missing file is not fatal.
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                config = Some(cfg);
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
                continue;
            }
        }
    }

    let mut config = config.unwrap_or_else(|| {
        info!("No config file found, using built-in defaults");
        Config::default()
    });

    if let Ok(port) = std::env::var("PORT") {
        config.system_config.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid PORT value '{}': {}", port, e))?;
    }

    // Initialize app state; the translator singleton lives for the whole
    // process and is shared read-only across requests.
    let app_state = AppState::new(config.clone()).await?;

    if !app_state.translator.health_check().await.unwrap_or(false) {
        warn!("Translation service is not reachable yet; requests will fail until it is up");
    }

    // Build application
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.system_config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
