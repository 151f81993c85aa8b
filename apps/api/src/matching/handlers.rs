//! Axum route handlers for preference ranking.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::preference::PreferenceProfile;
use crate::matching::ranker::{rank, ScoredJobPosting};
use crate::state::AppState;

/// Comma-separated preference text, as typed into the preferences form.
#[derive(Debug, Default, Deserialize)]
pub struct PreferenceQuery {
    #[serde(default)]
    pub roles: String,
    #[serde(default)]
    pub locations: String,
    #[serde(default)]
    pub industries: String,
}

/// GET /api/v1/jobs/ranked?roles=..&locations=..&industries=..
pub async fn handle_ranked_jobs(
    State(state): State<AppState>,
    Query(query): Query<PreferenceQuery>,
) -> Result<Json<Vec<ScoredJobPosting>>, AppError> {
    let profile =
        PreferenceProfile::from_comma_lists(&query.roles, &query.locations, &query.industries);
    rank_catalog(&state, &profile).await.map(Json)
}

/// POST /api/v1/jobs/rank
pub async fn handle_rank_jobs(
    State(state): State<AppState>,
    Json(profile): Json<PreferenceProfile>,
) -> Result<Json<Vec<ScoredJobPosting>>, AppError> {
    rank_catalog(&state, &profile).await.map(Json)
}

async fn rank_catalog(
    state: &AppState,
    profile: &PreferenceProfile,
) -> Result<Vec<ScoredJobPosting>, AppError> {
    let catalog = state.catalog.list_jobs().await?;
    let ranked = rank(&catalog, profile);

    debug!(
        "Ranked {} jobs from {} catalog ({} strong matches)",
        ranked.len(),
        state.catalog.source(),
        ranked.iter().filter(|j| j.strong_match).count()
    );

    Ok(ranked)
}
