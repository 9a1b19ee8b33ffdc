//! Axum route handlers for the job-ad catalog.

use axum::{extract::Path, Json};

use crate::errors::AppError;
use crate::jobs::{self, JobAd};

/// GET /api/v1/jobs
pub async fn handle_list_jobs() -> Json<Vec<JobAd>> {
    Json(jobs::job_ads().to_vec())
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(Path(job_id): Path<String>) -> Result<Json<JobAd>, AppError> {
    let ad = jobs::get_job_ad(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job ad '{job_id}' not found")))?;
    Ok(Json(ad.clone()))
}
