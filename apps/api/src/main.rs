mod applications;
mod catalog;
mod config;
mod db;
mod errors;
mod llm_client;
mod matching;
mod models;
mod routes;
mod screening;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{JobCatalog, PgCatalog, SeedCatalog};
use crate::config::{CatalogSource, Config, ScreeningBackend};
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::screening::{KeywordScreeningOracle, LlmScreeningOracle, ScreeningOracle};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    let catalog: Arc<dyn JobCatalog> = match config.catalog_source {
        CatalogSource::Seed => Arc::new(SeedCatalog::default()),
        CatalogSource::Postgres => Arc::new(PgCatalog::new(db.clone())),
    };
    info!("Job catalog initialized (source: {})", catalog.source());

    let screener = build_screener(&config)?;
    info!("Screening oracle initialized (backend: {})", screener.backend());

    let state = AppState {
        db,
        catalog,
        screener,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_screener(config: &Config) -> Result<Arc<dyn ScreeningOracle>> {
    match config.screening_backend {
        ScreeningBackend::Llm => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .context("ANTHROPIC_API_KEY is required for LLM screening")?;
            let llm = LlmClient::new(api_key).context("Failed to build LLM HTTP client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(Arc::new(LlmScreeningOracle(llm)))
        }
        ScreeningBackend::Keyword => Ok(Arc::new(KeywordScreeningOracle)),
    }
}
