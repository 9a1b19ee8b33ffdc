use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::state::AppState;

/// Extractor guarding the admin routes: the `X-Admin-Token` header must match
/// the configured token. Adding it as a handler argument is the whole guard.
pub struct AdminAuth;

#[async_trait]
impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("x-admin-token")
            .and_then(|value| value.to_str().ok());

        match token {
            Some(token) if token == state.config.admin_token => Ok(AdminAuth),
            _ => Err(AppError::Unauthorized),
        }
    }
}
