//! Actors and credential resolution
//!
//! Authentication itself is an external concern: the API only needs an
//! [`AuthProvider`] that resolves an opaque bearer credential to an
//! [`Actor`]. Every operation receives the resolved actor explicitly; there
//! is no ambient principal.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// The authenticated user making a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
}

/// Trait for credential resolution.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve an opaque credential to an actor, or `None` when the
    /// credential is unknown.
    async fn resolve(&self, token: &str) -> Result<Option<Actor>>;
}

/// In-memory token table, for tests and development.
#[derive(Clone, Default)]
pub struct InMemoryAuthProvider {
    tokens: Arc<RwLock<HashMap<String, Actor>>>,
}

impl InMemoryAuthProvider {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a fresh actor and hand back its credential.
    pub fn issue(&self) -> Result<(String, Actor)> {
        let actor = Actor { id: Uuid::new_v4() };
        let token = Uuid::new_v4().simple().to_string();

        let mut tokens = self
            .tokens
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        tokens.insert(token.clone(), actor);

        Ok((token, actor))
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn resolve(&self, token: &str) -> Result<Option<Actor>> {
        let tokens = self
            .tokens
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tokens.get(token).copied())
    }
}
