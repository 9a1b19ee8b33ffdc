//! Axum route handlers for candidate submissions and the admin views.

use std::path::{Path as FsPath, PathBuf};

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::AdminAuth;
use crate::candidates::models::CandidateRow;
use crate::errors::AppError;
use crate::jobs;
use crate::scan::highlight::highlight_matches;
use crate::scan::keywords::KeywordTiers;
use crate::scan::{self, ScanResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub candidate_id: i64,
    pub score: f64,
    pub matched_keywords: KeywordTiers,
    pub missing_keywords: KeywordTiers,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub candidate_id: i64,
    pub name: String,
    pub job_id: String,
    pub job_title: Option<String>,
    pub score: f64,
    pub matched_keywords: KeywordTiers,
    pub missing_keywords: KeywordTiers,
    pub suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CandidateSummary {
    pub candidate_id: i64,
    pub name: String,
    pub job_id: String,
    pub score: f64,
    pub pdf_filename: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CandidateDetail {
    #[serde(flatten)]
    pub report: ScanReport,
    pub highlighted_text: String,
    pub pdf_filename: String,
}

#[derive(Debug, Deserialize)]
pub struct JobFilterQuery {
    pub job: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Public handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/scans
///
/// Multipart form: `name`, `job_id`, and a `pdf` file. Stores the upload,
/// runs the scan pipeline against the job ad's keywords, persists the result,
/// and returns the scored record.
pub async fn handle_submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let mut name: Option<String> = None;
    let mut job_id: Option<String> = None;
    let mut pdf: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid 'name' field: {e}")))?;
                name = Some(value.trim().to_string());
            }
            Some("job_id") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid 'job_id' field: {e}")))?;
                job_id = Some(value.trim().to_string());
            }
            Some("pdf") => {
                let filename = field.file_name().unwrap_or("cv.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid 'pdf' upload: {e}")))?;
                pdf = Some((filename, data));
            }
            _ => {}
        }
    }

    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("'name' is required".to_string()))?;
    let job_id = job_id
        .filter(|j| !j.is_empty())
        .ok_or_else(|| AppError::Validation("'job_id' is required".to_string()))?;
    let (filename, data) =
        pdf.ok_or_else(|| AppError::Validation("A 'pdf' upload is required".to_string()))?;

    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(
            "Only PDF files are accepted".to_string(),
        ));
    }
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded PDF is empty".to_string()));
    }

    let job_ad = jobs::get_job_ad(&job_id)
        .ok_or_else(|| AppError::Validation(format!("Unknown job ad '{job_id}'")))?;

    let stored_name = unique_filename(&filename);
    let pdf_path = upload_path(&state, &stored_name);
    tokio::fs::write(&pdf_path, &data)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to store upload: {e}")))?;

    // PDF parsing is CPU-bound; keep it off the async workers.
    let keywords = job_ad.keywords.clone();
    let weights = state.weights;
    let scan_path = pdf_path.clone();
    let result: ScanResult =
        tokio::task::spawn_blocking(move || scan::scan(&scan_path, keywords, weights))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("scan task failed: {e}")))??;

    let insert = sqlx::query(
        r#"INSERT INTO candidates
           (name, job_id, pdf_filename, cv_text, score,
            matched_keywords, missing_keywords, suggestions, created_at)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(&name)
    .bind(&job_id)
    .bind(&stored_name)
    .bind(&result.cv_text)
    .bind(result.score)
    .bind(encode_json(&result.matched_keywords)?)
    .bind(encode_json(&result.missing_keywords)?)
    .bind(encode_json(&result.suggestions)?)
    .bind(Utc::now())
    .execute(&state.db)
    .await?;
    let candidate_id = insert.last_insert_rowid();

    info!(candidate_id, job_id = %job_id, score = result.score, "CV scan stored");

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            candidate_id,
            score: result.score,
            matched_keywords: result.matched_keywords,
            missing_keywords: result.missing_keywords,
            suggestions: result.suggestions,
        }),
    ))
}

/// GET /api/v1/scans/:id
pub async fn handle_results(
    State(state): State<AppState>,
    Path(candidate_id): Path<i64>,
) -> Result<Json<ScanReport>, AppError> {
    let row = fetch_candidate(&state, candidate_id).await?;
    Ok(Json(build_report(row)?))
}

// ────────────────────────────────────────────────────────────────────────────
// Admin handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/admin/candidates?job=<id|all>
pub async fn handle_admin_list(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Query(params): Query<JobFilterQuery>,
) -> Result<Json<Vec<CandidateSummary>>, AppError> {
    let rows: Vec<CandidateRow> = match params.job.as_deref() {
        Some(job) if job != "all" => {
            sqlx::query_as("SELECT * FROM candidates WHERE job_id = ? ORDER BY score DESC")
                .bind(job)
                .fetch_all(&state.db)
                .await?
        }
        _ => {
            sqlx::query_as("SELECT * FROM candidates ORDER BY score DESC")
                .fetch_all(&state.db)
                .await?
        }
    };

    let summaries = rows
        .into_iter()
        .map(|row| CandidateSummary {
            candidate_id: row.id,
            name: row.name,
            job_id: row.job_id,
            score: row.score,
            pdf_filename: row.pdf_filename,
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(summaries))
}

/// GET /api/v1/admin/candidates/:id
///
/// Full record plus the CV text with every matched keyword (both tiers)
/// wrapped in `<mark>` tags for display.
pub async fn handle_admin_candidate(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(candidate_id): Path<i64>,
) -> Result<Json<CandidateDetail>, AppError> {
    let row = fetch_candidate(&state, candidate_id).await?;
    let pdf_filename = row.pdf_filename.clone();
    let cv_text = row.cv_text.clone();
    let report = build_report(row)?;

    let all_matched: Vec<String> = report.matched_keywords.all().cloned().collect();
    let highlighted_text = highlight_matches(&cv_text, &all_matched);

    Ok(Json(CandidateDetail {
        report,
        highlighted_text,
        pdf_filename,
    }))
}

/// GET /api/v1/admin/candidates/:id/pdf
pub async fn handle_admin_pdf(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(candidate_id): Path<i64>,
) -> Result<Response, AppError> {
    let row = fetch_candidate(&state, candidate_id).await?;
    let path = upload_path(&state, &row.pdf_filename);

    let bytes = tokio::fs::read(&path).await.map_err(|_| {
        AppError::NotFound(format!("Stored PDF for candidate {candidate_id} is missing"))
    })?;

    Ok(([(header::CONTENT_TYPE, "application/pdf")], bytes).into_response())
}

/// DELETE /api/v1/admin/candidates
///
/// Wipes all candidate rows and clears the upload directory.
pub async fn handle_admin_delete_all(
    State(state): State<AppState>,
    _admin: AdminAuth,
) -> Result<StatusCode, AppError> {
    sqlx::query("DELETE FROM candidates")
        .execute(&state.db)
        .await?;

    let dir = PathBuf::from(&state.config.upload_dir);
    if tokio::fs::metadata(&dir).await.is_ok() {
        tokio::fs::remove_dir_all(&dir)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to clear uploads: {e}")))?;
    }
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to recreate uploads: {e}")))?;

    info!("All candidate data deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn fetch_candidate(state: &AppState, candidate_id: i64) -> Result<CandidateRow, AppError> {
    let row: Option<CandidateRow> = sqlx::query_as("SELECT * FROM candidates WHERE id = ?")
        .bind(candidate_id)
        .fetch_optional(&state.db)
        .await?;
    row.ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))
}

fn build_report(row: CandidateRow) -> Result<ScanReport, AppError> {
    let matched = KeywordTiers::from_stored(&row.matched_keywords)
        .map_err(|e| AppError::Internal(e.into()))?;
    let missing = KeywordTiers::from_stored(&row.missing_keywords)
        .map_err(|e| AppError::Internal(e.into()))?;
    let suggestions: Vec<String> =
        serde_json::from_str(&row.suggestions).map_err(|e| AppError::Internal(e.into()))?;

    Ok(ScanReport {
        candidate_id: row.id,
        name: row.name,
        job_title: jobs::get_job_ad(&row.job_id).map(|ad| ad.title.clone()),
        job_id: row.job_id,
        score: row.score,
        matched_keywords: matched,
        missing_keywords: missing,
        suggestions,
        created_at: row.created_at,
    })
}

fn encode_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|e| AppError::Internal(e.into()))
}

fn upload_path(state: &AppState, filename: &str) -> PathBuf {
    FsPath::new(&state.config.upload_dir).join(filename)
}

/// Sanitizes the uploaded filename's stem and appends a UUID so concurrent
/// uploads of the same file never collide.
fn unique_filename(original: &str) -> String {
    let stem = FsPath::new(original)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cv");
    let safe: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{safe}_{}.pdf", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_filename_sanitizes_stem() {
        let name = unique_filename("../etc/pass wd!.pdf");
        assert!(name.starts_with("pass_wd_"));
        assert!(name.ends_with(".pdf"));
        assert!(!name.contains('/'));
        assert!(!name.contains(' '));
    }

    #[test]
    fn test_unique_filename_defaults_missing_stem() {
        assert!(unique_filename(".pdf").ends_with(".pdf"));
    }

    #[test]
    fn test_unique_filename_is_unique() {
        assert_ne!(unique_filename("cv.pdf"), unique_filename("cv.pdf"));
    }
}
