//! Screening — pluggable oracle that rates a candidate against a job at
//! application time and returns a score with a one-sentence feedback.
//!
//! Default: `LlmScreeningOracle` (semantic, via the LLM client).
//! Offline: `KeywordScreeningOracle` (pure-Rust, deterministic, no network).
//!
//! `AppState` holds an `Arc<dyn ScreeningOracle>`, chosen at startup via config.

pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::{parse_json_text, LlmClient};
use crate::models::job::JobPosting;
use crate::screening::prompts::{build_screening_prompt, SCREENING_SYSTEM};

/// Used when the model answers with no text at all.
const FALLBACK_SCORE: u8 = 75;
const FALLBACK_FEEDBACK: &str = "Processed successfully";

/// What the applicant submitted about themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub resume_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub score: u8, // 0 – 100
    pub feedback: String,
}

#[async_trait]
pub trait ScreeningOracle: Send + Sync {
    async fn screen(
        &self,
        job: &JobPosting,
        candidate: &CandidateProfile,
    ) -> Result<ScreeningResult, AppError>;

    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmScreeningOracle
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmScreeningOracle(pub LlmClient);

/// Shape requested from the model. The score may come back fractional or out of range.
#[derive(Debug, Deserialize)]
struct RawScreening {
    score: f64,
    feedback: String,
}

#[async_trait]
impl ScreeningOracle for LlmScreeningOracle {
    async fn screen(
        &self,
        job: &JobPosting,
        candidate: &CandidateProfile,
    ) -> Result<ScreeningResult, AppError> {
        let prompt = build_screening_prompt(
            &job.title,
            &job.description,
            &candidate.name,
            &candidate.resume_text,
        );

        let response = self
            .0
            .call(&prompt, SCREENING_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Screening call failed: {e}")))?;

        interpret_response(response.text())
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

fn interpret_response(text: Option<&str>) -> Result<ScreeningResult, AppError> {
    let text = match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => {
            warn!("Screening response was empty, using fallback score");
            return Ok(ScreeningResult {
                score: FALLBACK_SCORE,
                feedback: FALLBACK_FEEDBACK.to_string(),
            });
        }
    };

    let raw: RawScreening = parse_json_text(text)
        .map_err(|e| AppError::Llm(format!("Screening response was not valid JSON: {e}")))?;

    Ok(ScreeningResult {
        score: clamp_score(raw.score),
        feedback: raw.feedback.trim().to_string(),
    })
}

fn clamp_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordScreeningOracle
// ────────────────────────────────────────────────────────────────────────────

/// Scores the share of the job's requirements mentioned in the resume text.
///
/// score = round(covered / total × 100); a job with no requirements scores 0.
pub struct KeywordScreeningOracle;

#[async_trait]
impl ScreeningOracle for KeywordScreeningOracle {
    async fn screen(
        &self,
        job: &JobPosting,
        candidate: &CandidateProfile,
    ) -> Result<ScreeningResult, AppError> {
        Ok(compute_keyword_screening(job, &candidate.resume_text))
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

fn compute_keyword_screening(job: &JobPosting, resume_text: &str) -> ScreeningResult {
    let requirements: Vec<&str> = job
        .requirements
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();

    if requirements.is_empty() {
        return ScreeningResult {
            score: 0,
            feedback: "No listed requirements to screen against.".to_string(),
        };
    }

    let resume_lower = resume_text.to_lowercase();
    let (covered, missing): (Vec<&str>, Vec<&str>) = requirements
        .iter()
        .partition(|r| resume_lower.contains(&r.to_lowercase()));

    let score = ((covered.len() as f64 / requirements.len() as f64) * 100.0).round() as u8;

    debug!(
        "Keyword screening for '{}': {}/{} requirements covered",
        job.title,
        covered.len(),
        requirements.len()
    );

    ScreeningResult {
        score,
        feedback: build_feedback(score, &missing),
    }
}

fn build_feedback(score: u8, missing: &[&str]) -> String {
    let top_missing = missing.iter().take(3).copied().collect::<Vec<_>>().join(", ");

    if missing.is_empty() {
        "Resume covers every listed requirement.".to_string()
    } else if score > 60 {
        format!("Good coverage of the role; not evidenced yet: {top_missing}.")
    } else {
        format!("Limited overlap with the role; missing: {top_missing}.")
    }
}
