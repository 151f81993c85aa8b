use std::sync::Arc;

use sqlx::PgPool;

use crate::catalog::JobCatalog;
use crate::screening::ScreeningOracle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Seed list or `jobs` table, per CATALOG_SOURCE.
    pub catalog: Arc<dyn JobCatalog>,
    /// LLM or keyword screening, per SCREENING_BACKEND.
    pub screener: Arc<dyn ScreeningOracle>,
}
