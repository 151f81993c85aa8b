// Applications: submission (screen, then persist) and the applicant-facing listing.
// Screening goes through the ScreeningOracle in AppState, never the LLM client directly.

pub mod handlers;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::JobCatalog;
use crate::errors::AppError;
use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::models::job::JobPosting;
use crate::screening::{CandidateProfile, ScreeningOracle};

const UNKNOWN_POSITION: &str = "Unknown Position";
const UNKNOWN_COMPANY: &str = "Unknown Company";

#[derive(Debug, Deserialize)]
pub struct SubmitApplicationRequest {
    pub job_id: Uuid,
    pub candidate_name: String,
    pub candidate_email: String,
    pub resume_text: String,
}

/// Bucket of the AI match score shown on the compatibility bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Moderate,
    Weak,
}

impl MatchTier {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 80 => MatchTier::Strong,
            s if s > 60 => MatchTier::Moderate,
            _ => MatchTier::Weak,
        }
    }
}

/// An application as the applicant sees it, with the job resolved from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationView {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub match_score: i32,
    pub match_tier: MatchTier,
    pub ai_feedback: String,
}

impl ApplicationView {
    pub fn from_row(row: ApplicationRow, job: Option<&JobPosting>) -> Self {
        let status = ApplicationStatus::parse(&row.status).unwrap_or_else(|| {
            warn!(
                "Application {} has unknown status '{}', showing as applied",
                row.id, row.status
            );
            ApplicationStatus::Applied
        });

        Self {
            id: row.id,
            job_id: row.job_id,
            job_title: job
                .map(|j| j.title.clone())
                .unwrap_or_else(|| UNKNOWN_POSITION.to_string()),
            company: job
                .map(|j| j.company.clone())
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
            candidate_name: row.candidate_name,
            candidate_email: row.candidate_email,
            status,
            applied_at: row.created_at,
            match_score: row.match_score,
            match_tier: MatchTier::from_score(row.match_score),
            ai_feedback: row.ai_feedback,
        }
    }
}

/// Checks the required form fields and returns the trimmed candidate.
pub fn validate_request(request: &SubmitApplicationRequest) -> Result<CandidateProfile, AppError> {
    let name = request.candidate_name.trim();
    let email = request.candidate_email.trim();
    let resume_text = request.resume_text.trim();

    if name.is_empty() {
        return Err(AppError::Validation("candidate_name cannot be empty".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation(
            "candidate_email must be a valid email address".to_string(),
        ));
    }
    if resume_text.is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    Ok(CandidateProfile {
        name: name.to_string(),
        email: email.to_string(),
        resume_text: resume_text.to_string(),
    })
}

/// Screens the candidate against the job and stores the application as `applied`.
/// A screening failure aborts the submission; nothing is stored.
pub async fn submit_application(
    pool: &PgPool,
    catalog: &dyn JobCatalog,
    oracle: &dyn ScreeningOracle,
    request: SubmitApplicationRequest,
) -> Result<ApplicationView, AppError> {
    let candidate = validate_request(&request)?;

    let job = catalog
        .get_job(request.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    let screening = oracle.screen(&job, &candidate).await?;

    let row = sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications
            (id, job_id, candidate_name, candidate_email, resume_text,
             status, match_score, ai_feedback)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(job.id)
    .bind(&candidate.name)
    .bind(&candidate.email)
    .bind(&candidate.resume_text)
    .bind(ApplicationStatus::Applied.as_str())
    .bind(i32::from(screening.score))
    .bind(&screening.feedback)
    .fetch_one(pool)
    .await?;

    info!(
        "Application {} submitted for job {} (score {}, backend {})",
        row.id,
        job.id,
        screening.score,
        oracle.backend()
    );

    Ok(ApplicationView::from_row(row, Some(&job)))
}

/// Lists applications newest first, optionally for one candidate email.
pub async fn list_applications(
    pool: &PgPool,
    catalog: &dyn JobCatalog,
    email: Option<&str>,
) -> Result<Vec<ApplicationView>, AppError> {
    let rows = sqlx::query_as::<_, ApplicationRow>(
        r#"
        SELECT * FROM applications
        WHERE ($1::text IS NULL OR candidate_email = $1)
        ORDER BY created_at DESC
        "#,
    )
    .bind(email)
    .fetch_all(pool)
    .await?;

    let jobs: HashMap<Uuid, JobPosting> = catalog
        .list_jobs()
        .await?
        .into_iter()
        .map(|j| (j.id, j))
        .collect();

    Ok(rows
        .into_iter()
        .map(|row| {
            let job = jobs.get(&row.job_id);
            ApplicationView::from_row(row, job)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_jobs;

    fn make_request(name: &str, email: &str, resume: &str) -> SubmitApplicationRequest {
        SubmitApplicationRequest {
            job_id: Uuid::new_v4(),
            candidate_name: name.to_string(),
            candidate_email: email.to_string(),
            resume_text: resume.to_string(),
        }
    }

    fn make_row(job_id: Uuid, status: &str, score: i32) -> ApplicationRow {
        ApplicationRow {
            id: Uuid::new_v4(),
            job_id,
            candidate_name: "Jane Doe".to_string(),
            candidate_email: "jane@example.com".to_string(),
            resume_text: "Rust".to_string(),
            status: status.to_string(),
            match_score: score,
            ai_feedback: "Solid fit.".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_trims_fields() {
        let candidate =
            validate_request(&make_request(" Jane ", " jane@example.com ", " Rust ")).unwrap();
        assert_eq!(candidate.name, "Jane");
        assert_eq!(candidate.email, "jane@example.com");
        assert_eq!(candidate.resume_text, "Rust");
    }

    #[test]
    fn test_validate_rejects_missing_name() {
        let err = validate_request(&make_request("  ", "jane@example.com", "Rust")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let err = validate_request(&make_request("Jane", "jane.example.com", "Rust")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_empty_resume() {
        let err = validate_request(&make_request("Jane", "jane@example.com", "")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_view_resolves_job_fields() {
        let job = seed_jobs().remove(0);
        let view = ApplicationView::from_row(make_row(job.id, "interview", 91), Some(&job));
        assert_eq!(view.job_title, job.title);
        assert_eq!(view.company, job.company);
        assert_eq!(view.status, ApplicationStatus::Interview);
        assert_eq!(view.match_tier, MatchTier::Strong);
    }

    #[test]
    fn test_view_falls_back_for_unknown_job() {
        let view = ApplicationView::from_row(make_row(Uuid::new_v4(), "applied", 50), None);
        assert_eq!(view.job_title, UNKNOWN_POSITION);
        assert_eq!(view.company, UNKNOWN_COMPANY);
    }

    #[test]
    fn test_view_unknown_status_shows_applied() {
        let view = ApplicationView::from_row(make_row(Uuid::new_v4(), "archived", 50), None);
        assert_eq!(view.status, ApplicationStatus::Applied);
    }

    #[test]
    fn test_match_tier_boundaries() {
        assert_eq!(MatchTier::from_score(81), MatchTier::Strong);
        assert_eq!(MatchTier::from_score(80), MatchTier::Moderate);
        assert_eq!(MatchTier::from_score(61), MatchTier::Moderate);
        assert_eq!(MatchTier::from_score(60), MatchTier::Weak);
        assert_eq!(MatchTier::from_score(0), MatchTier::Weak);
    }
}
