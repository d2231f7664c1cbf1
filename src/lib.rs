//! # carnet
//!
//! A minimal authenticated CRUD API for per-user contact records.
//!
//! ## Design
//!
//! - **Explicit actor context**: every operation receives the resolved
//!   [`core::auth::Actor`]; there is no ambient principal.
//! - **Owner-scoped authorization**: a pure decision function over a closed
//!   action set ([`core::policy`]); record-level actions allow only the
//!   contact's owner, and the store never exposes a cross-owner query.
//! - **Structured validation**: one enumerable rule table evaluated by a
//!   pure function returning either normalized fields or a per-field error
//!   map ([`core::validation`]).
//! - **Repository seam**: persistence sits behind the
//!   [`core::store::ContactStore`] trait, taking and returning plain data;
//!   [`storage::InMemoryContactStore`] backs tests and development.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use carnet::prelude::*;
//!
//! let auth = InMemoryAuthProvider::new();
//! let (token, _actor) = auth.issue()?;
//!
//! let state = AppState {
//!     contacts: Arc::new(InMemoryContactStore::new()),
//!     auth: Arc::new(auth),
//! };
//!
//! let app = build_router(state);
//! // GET /contacts with `Authorization: Bearer <token>`
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        auth::{Actor, AuthProvider, InMemoryAuthProvider},
        contact::{BIRTHDAY_FORMAT, Contact, ContactFields},
        error::ApiError,
        policy::{ContactAction, can},
        representation::{CollectionResponse, ContactRepresentation, SingleResponse},
        store::ContactStore,
        validation::{FieldErrors, validate},
    };

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === Storage ===
    pub use crate::storage::InMemoryContactStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
