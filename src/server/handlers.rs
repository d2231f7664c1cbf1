//! HTTP handlers for contact operations
//!
//! Each handler is one run of the fixed pipeline: authenticate (via the
//! [`Authenticated`] extractor) → resolve target → authorize → validate →
//! mutate/read → represent. Every step short-circuits with a terminal
//! [`ApiError`]; there are no retries and no partial effects. Authorization
//! strictly precedes validation, so a malformed body on an unauthorized
//! update still reports Forbidden, and an unresolvable id reports NotFound.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::auth::AuthProvider;
use crate::core::error::ApiError;
use crate::core::policy::{ContactAction, can};
use crate::core::representation::{CollectionResponse, SingleResponse};
use crate::core::store::ContactStore;
use crate::core::validation;
use crate::server::extractors::Authenticated;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactStore>,
    pub auth: Arc<dyn AuthProvider>,
}

/// GET /contacts
///
/// The store scopes results to the actor; the policy never widens them.
pub async fn index(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated,
) -> Result<Json<CollectionResponse>, ApiError> {
    if !can(&actor, ContactAction::ViewAny, None) {
        return Err(ApiError::Forbidden);
    }

    let contacts = state.contacts.list(&actor.id).await?;

    Ok(Json(CollectionResponse::of(&contacts)))
}

/// POST /contacts
pub async fn store(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<SingleResponse>), ApiError> {
    if !can(&actor, ContactAction::Create, None) {
        return Err(ApiError::Forbidden);
    }

    let fields = validation::validate(&body).map_err(ApiError::Validation)?;
    let contact = state.contacts.insert(&actor.id, fields).await?;

    tracing::debug!(contact_id = %contact.id, owner_id = %actor.id, "contact created");

    Ok((StatusCode::CREATED, Json(SingleResponse::of(&contact))))
}

/// GET /contacts/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Authenticated(actor): Authenticated,
) -> Result<Json<SingleResponse>, ApiError> {
    let contact = state.contacts.get(&id).await?.ok_or(ApiError::NotFound)?;

    if !can(&actor, ContactAction::View, Some(&contact)) {
        return Err(ApiError::Forbidden);
    }

    Ok(Json(SingleResponse::of(&contact)))
}

/// PATCH /contacts/{id}
///
/// Full replacement of the four business fields; partial update is not
/// supported.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Authenticated(actor): Authenticated,
    Json(body): Json<Value>,
) -> Result<Json<SingleResponse>, ApiError> {
    let contact = state.contacts.get(&id).await?.ok_or(ApiError::NotFound)?;

    if !can(&actor, ContactAction::Update, Some(&contact)) {
        return Err(ApiError::Forbidden);
    }

    let fields = validation::validate(&body).map_err(ApiError::Validation)?;
    let updated = state
        .contacts
        .replace(&id, fields)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::debug!(contact_id = %updated.id, "contact updated");

    Ok(Json(SingleResponse::of(&updated)))
}

/// DELETE /contacts/{id}
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Authenticated(actor): Authenticated,
) -> Result<StatusCode, ApiError> {
    let contact = state.contacts.get(&id).await?.ok_or(ApiError::NotFound)?;

    if !can(&actor, ContactAction::Delete, Some(&contact)) {
        return Err(ApiError::Forbidden);
    }

    if !state.contacts.remove(&id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::debug!(contact_id = %id, "contact deleted");

    Ok(StatusCode::NO_CONTENT)
}
