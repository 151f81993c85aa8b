//! Axum route handlers for the Applications API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::applications::{
    list_applications, submit_application, ApplicationView, SubmitApplicationRequest,
};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplicationsQuery {
    pub email: Option<String>,
}

/// POST /api/v1/applications
///
/// Screens the candidate, stores the application and returns it with its AI score.
pub async fn handle_submit_application(
    State(state): State<AppState>,
    Json(request): Json<SubmitApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationView>), AppError> {
    let view = submit_application(
        &state.db,
        state.catalog.as_ref(),
        state.screener.as_ref(),
        request,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/applications?email=..
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(params): Query<ApplicationsQuery>,
) -> Result<Json<Vec<ApplicationView>>, AppError> {
    let email = params
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());
    let applications = list_applications(&state.db, state.catalog.as_ref(), email).await?;
    Ok(Json(applications))
}
