use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A scanned candidate submission as stored in SQLite.
///
/// The keyword breakdowns and suggestions are JSON TEXT columns. Rows written
/// before keyword tiers existed hold flat arrays there; they are decoded
/// through `KeywordTiers::from_stored`, which folds a flat array into the
/// must-have tier.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: i64,
    pub name: String,
    pub job_id: String,
    pub pdf_filename: String,
    pub cv_text: String,
    pub score: f64,
    pub matched_keywords: String,
    pub missing_keywords: String,
    pub suggestions: String,
    pub created_at: DateTime<Utc>,
}
