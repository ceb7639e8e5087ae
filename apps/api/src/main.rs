mod admin;
mod config;
mod db;
mod errors;
mod extract;
mod flows;
mod help;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::admin::store::PgStore;
use crate::config::Config;
use crate::db::connect_marketplace;
use crate::help::HelpContent;
use crate::llm_client::{install_provider, provider, AnthropicProvider};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Fractional API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = connect_marketplace(&config.database_url).await?;
    let store = Arc::new(PgStore::new(db));

    // Install the process-wide model provider
    install_provider(Arc::new(AnthropicProvider::new(
        config.anthropic_api_key.clone(),
    )?));
    let llm = provider()?;
    info!("Model provider installed (model: {})", llm_client::MODEL);

    let help = Arc::new(HelpContent::load(&config.help_content_path).await?);

    let state = AppState {
        store,
        llm,
        help,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the web client's domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
