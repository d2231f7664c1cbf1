//! Repository seam between the request pipeline and persistence

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::core::contact::{Contact, ContactFields};

/// Service trait for the contact record store.
///
/// Implementations own id assignment and timestamp maintenance; callers
/// never set either. There is no cross-owner query: every read is scoped by
/// an explicit owner or a resolved id.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// List every contact belonging to `owner_id`, oldest first.
    async fn list(&self, owner_id: &Uuid) -> Result<Vec<Contact>>;

    /// Get a contact by id.
    async fn get(&self, id: &Uuid) -> Result<Option<Contact>>;

    /// Insert a new contact for `owner_id`, assigning id and timestamps.
    async fn insert(&self, owner_id: &Uuid, fields: ContactFields) -> Result<Contact>;

    /// Overwrite the four business fields and refresh `updated_at`.
    ///
    /// `id`, `owner_id` and `created_at` are unchanged. Returns `None` when
    /// the id does not resolve.
    async fn replace(&self, id: &Uuid, fields: ContactFields) -> Result<Option<Contact>>;

    /// Remove a contact. Returns `false` when the id does not resolve.
    async fn remove(&self, id: &Uuid) -> Result<bool>;
}
