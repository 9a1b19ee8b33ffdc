pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::candidates::handlers as candidates;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Public API
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route("/api/v1/scans", post(candidates::handle_submit))
        .route("/api/v1/scans/:id", get(candidates::handle_results))
        // Admin API (X-Admin-Token)
        .route(
            "/api/v1/admin/candidates",
            get(candidates::handle_admin_list).delete(candidates::handle_admin_delete_all),
        )
        .route(
            "/api/v1/admin/candidates/:id",
            get(candidates::handle_admin_candidate),
        )
        .route(
            "/api/v1/admin/candidates/:id/pdf",
            get(candidates::handle_admin_pdf),
        )
        .with_state(state)
}
