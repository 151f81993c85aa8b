use anyhow::{bail, Context, Result};

/// Where listed jobs come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Seed,
    Postgres,
}

impl CatalogSource {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "seed" => Ok(CatalogSource::Seed),
            "postgres" => Ok(CatalogSource::Postgres),
            other => bail!("CATALOG_SOURCE must be 'seed' or 'postgres', got '{other}'"),
        }
    }
}

/// Which oracle screens applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningBackend {
    Llm,
    Keyword,
}

impl ScreeningBackend {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "llm" => Ok(ScreeningBackend::Llm),
            "keyword" => Ok(ScreeningBackend::Keyword),
            other => bail!("SCREENING_BACKEND must be 'llm' or 'keyword', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Only required when screening through the LLM.
    pub anthropic_api_key: Option<String>,
    pub catalog_source: CatalogSource,
    pub screening_backend: ScreeningBackend,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let catalog_source =
            CatalogSource::parse(&optional_env("CATALOG_SOURCE").unwrap_or_else(|| "seed".into()))?;
        let screening_backend = ScreeningBackend::parse(
            &optional_env("SCREENING_BACKEND").unwrap_or_else(|| "llm".into()),
        )?;

        let anthropic_api_key = match screening_backend {
            ScreeningBackend::Llm => Some(require_env("ANTHROPIC_API_KEY")?),
            ScreeningBackend::Keyword => optional_env("ANTHROPIC_API_KEY"),
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key,
            catalog_source,
            screening_backend,
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
