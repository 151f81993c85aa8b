pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route("/api/v1/jobs", get(catalog::handle_list_jobs))
        .route("/api/v1/jobs/ranked", get(matching::handle_ranked_jobs))
        .route("/api/v1/jobs/rank", post(matching::handle_rank_jobs))
        .route("/api/v1/jobs/:id", get(catalog::handle_get_job))
        // Applications
        .route(
            "/api/v1/applications",
            post(applications::handle_submit_application)
                .get(applications::handle_list_applications),
        )
        .with_state(state)
}
