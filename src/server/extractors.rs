//! Request extractors for the contacts API
//!
//! [`Authenticated`] resolves the request credential to an [`Actor`] before
//! any handler logic runs. A missing or unknown credential rejects with
//! [`ApiError::Unauthenticated`], so the pipeline never reaches target
//! resolution, authorization or validation for such requests.

use axum::extract::{FromRequestParts, Query};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use serde::Deserialize;

use crate::core::auth::Actor;
use crate::core::error::ApiError;
use crate::server::handlers::AppState;

/// The actor resolved from the request credential.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub Actor);

/// Credential transport: `Authorization: Bearer <token>` header, or the
/// `api_token` query parameter.
#[derive(Deserialize)]
struct TokenQuery {
    api_token: Option<String>,
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
}

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match bearer_token(parts) {
            Some(token) => Some(token),
            None => Query::<TokenQuery>::from_request_parts(parts, state)
                .await
                .ok()
                .and_then(|Query(query)| query.api_token),
        }
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::Unauthenticated)?;

        let actor = state
            .auth
            .resolve(&token)
            .await
            .map_err(ApiError::from)?
            .ok_or(ApiError::Unauthenticated)?;

        Ok(Authenticated(actor))
    }
}
