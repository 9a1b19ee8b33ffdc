use sqlx::SqlitePool;

use crate::config::Config;
use crate::scan::score::ScoreWeights;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
    /// Tier weights applied to every scan. Constant for the process lifetime.
    pub weights: ScoreWeights,
}
