//! In-memory implementation of ContactStore for testing and development

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::core::contact::{Contact, ContactFields};
use crate::core::store::ContactStore;

/// In-memory contact store.
///
/// Uses RwLock for thread-safe access; `replace` and `remove` hold the write
/// lock for the whole mutation, so concurrent `get` calls never observe a
/// half-written record.
#[derive(Clone)]
pub struct InMemoryContactStore {
    contacts: Arc<RwLock<HashMap<Uuid, Contact>>>,
}

impl InMemoryContactStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Total number of records, across all owners. Test hook; the
    /// [`ContactStore`] contract deliberately has no unscoped query.
    pub fn len(&self) -> usize {
        self.contacts.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn list(&self, owner_id: &Uuid) -> Result<Vec<Contact>> {
        let contacts = self
            .contacts
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut owned: Vec<Contact> = contacts
            .values()
            .filter(|contact| &contact.owner_id == owner_id)
            .cloned()
            .collect();

        // HashMap iteration order is arbitrary; present oldest first.
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        Ok(owned)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Contact>> {
        let contacts = self
            .contacts
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(contacts.get(id).cloned())
    }

    async fn insert(&self, owner_id: &Uuid, fields: ContactFields) -> Result<Contact> {
        let contact = Contact::new(*owner_id, fields);

        let mut contacts = self
            .contacts
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        contacts.insert(contact.id, contact.clone());

        Ok(contact)
    }

    async fn replace(&self, id: &Uuid, fields: ContactFields) -> Result<Option<Contact>> {
        let mut contacts = self
            .contacts
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match contacts.get_mut(id) {
            Some(contact) => {
                contact.apply(fields);
                Ok(Some(contact.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: &Uuid) -> Result<bool> {
        let mut contacts = self
            .contacts
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(contacts.remove(id).is_some())
    }
}
