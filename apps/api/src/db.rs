use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

const CREATE_CANDIDATES: &str = r#"
CREATE TABLE IF NOT EXISTS candidates (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    job_id TEXT NOT NULL,
    pdf_filename TEXT NOT NULL,
    cv_text TEXT NOT NULL,
    score REAL NOT NULL,
    matched_keywords TEXT NOT NULL,
    missing_keywords TEXT NOT NULL,
    suggestions TEXT NOT NULL,
    created_at TEXT NOT NULL
)
"#;

const CREATE_SCORE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_candidates_job_score ON candidates (job_id, score DESC)";

/// Creates the SQLite connection pool and applies the schema idempotently.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    sqlx::query(CREATE_CANDIDATES).execute(&pool).await?;
    sqlx::query(CREATE_SCORE_INDEX).execute(&pool).await?;

    info!("SQLite connection pool established");
    Ok(pool)
}
