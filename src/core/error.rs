//! Typed outcomes for the contacts API
//!
//! Every pipeline run either succeeds or terminates with one of the outcomes
//! below. The HTTP mapping lives here too, so handlers only ever deal with
//! `Result<_, ApiError>`:
//!
//! - `Unauthenticated` → 401, empty body
//! - `NotFound` → 404, empty body
//! - `Forbidden` → 403, empty body (the id resolved but the actor is not the
//!   owner; never reported as `NotFound`)
//! - `Validation` → 422 with a per-field error map
//! - `Internal` → 500, opaque

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::core::validation::FieldErrors;

/// Terminal outcome of a request pipeline, short of success.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or unknown credential; nothing past authentication ran.
    Unauthenticated,

    /// The target id does not resolve to any contact, whoever owns it.
    NotFound,

    /// The target resolved but the actor is not its owner.
    Forbidden,

    /// One or more fields missing or malformed; no mutation was performed.
    Validation(FieldErrors),

    /// Storage failure, surfaced opaquely.
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthenticated => write!(f, "Unauthenticated"),
            ApiError::NotFound => write!(f, "Contact not found"),
            ApiError::Forbidden => write!(f, "This action is unauthorized"),
            ApiError::Validation(errors) => {
                let fields: Vec<&str> = errors.keys().map(|k| k.as_str()).collect();
                write!(f, "Validation failed for: {}", fields.join(", "))
            }
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Get the HTTP status code for this outcome
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this outcome
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated => "UNAUTHENTICATED",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Forbidden => "FORBIDDEN",
            ApiError::Validation(_) => "VALIDATION_FAILED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Body of a 422 response: the whole-operation message plus the
/// field → messages map.
#[derive(Debug, Serialize)]
pub struct ValidationBody {
    pub message: String,
    pub errors: FieldErrors,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody {
                    message: "The given data was invalid.".to_string(),
                    errors,
                }),
            )
                .into_response(),
            ApiError::Internal(message) => {
                tracing::error!(%message, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            // NotFound, Forbidden and Unauthenticated carry no body: the
            // status alone distinguishes them and nothing leaks.
            other => other.status_code().into_response(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_errors() -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .entry("name".to_string())
            .or_default()
            .push("The name field is required.".to_string());
        errors
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::Validation(field_errors()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::Forbidden.error_code(), "FORBIDDEN");
        assert_eq!(
            ApiError::Validation(field_errors()).error_code(),
            "VALIDATION_FAILED"
        );
    }

    #[test]
    fn test_forbidden_is_distinct_from_not_found() {
        assert_ne!(
            ApiError::Forbidden.status_code(),
            ApiError::NotFound.status_code()
        );
    }

    #[test]
    fn test_display_names_failing_fields() {
        let err = ApiError::Validation(field_errors());
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_into_response_empty_body_statuses() {
        let response = ApiError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_into_response_validation_carries_body() {
        let response = ApiError::Validation(field_errors()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_from_anyhow_is_internal() {
        let err: ApiError = anyhow::anyhow!("lock poisoned").into();
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
