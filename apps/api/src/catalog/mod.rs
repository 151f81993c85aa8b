//! Job catalog — where listed jobs come from.
//!
//! `SeedCatalog` serves a fixed in-memory list; `PgCatalog` reads the `jobs`
//! table newest first. `AppState` holds an `Arc<dyn JobCatalog>` chosen at startup.

pub mod handlers;
pub mod seed;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobRow};

#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// All listed jobs in the source's reference order.
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError>;

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError>;

    /// Label for logs and the health endpoint.
    fn source(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// SeedCatalog
// ────────────────────────────────────────────────────────────────────────────

/// Fixed catalog kept in insertion order. Never mutated after construction.
pub struct SeedCatalog {
    jobs: Vec<JobPosting>,
}

impl SeedCatalog {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new(seed::seed_jobs())
    }
}

#[async_trait]
impl JobCatalog for SeedCatalog {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(self.jobs.clone())
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError> {
        Ok(self.jobs.iter().find(|j| j.id == id).cloned())
    }

    fn source(&self) -> &'static str {
        "seed"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PgCatalog
// ────────────────────────────────────────────────────────────────────────────

pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobCatalog for PgCatalog {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(
            "SELECT * FROM jobs ORDER BY posted_at DESC NULLS LAST, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError> {
        let row = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(JobPosting::from))
    }

    fn source(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_catalog_lists_in_insertion_order() {
        let catalog = SeedCatalog::default();
        let listed = catalog.list_jobs().await.unwrap();
        assert_eq!(listed, seed::seed_jobs());
    }

    #[tokio::test]
    async fn test_seed_catalog_get_job() {
        let catalog = SeedCatalog::default();
        let first = seed::seed_jobs().remove(0);

        let found = catalog.get_job(first.id).await.unwrap();
        assert_eq!(found, Some(first));

        let missing = catalog.get_job(Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_empty_seed_catalog() {
        let catalog = SeedCatalog::new(vec![]);
        assert!(catalog.list_jobs().await.unwrap().is_empty());
        assert_eq!(catalog.source(), "seed");
    }
}
