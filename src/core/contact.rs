//! The contact record and its normalized field set

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input and display format for birthdays (`02/14/1995`).
pub const BIRTHDAY_FORMAT: &str = "%m/%d/%Y";

/// A contact record as stored.
///
/// Every contact belongs to exactly one owner, fixed at creation. The four
/// business fields (`name`, `email`, `birthday`, `company`) are replaced as a
/// whole on update; `id`, `owner_id` and `created_at` never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub email: String,
    pub birthday: NaiveDate,
    pub company: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The validated business fields of a contact.
///
/// Produced by [`crate::core::validation::validate`]; this is the only way
/// field data reaches the store, so a `ContactFields` is always complete.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub birthday: NaiveDate,
    pub company: String,
}

impl Contact {
    /// Create a new contact owned by `owner_id`, assigning a fresh id and
    /// both timestamps.
    pub fn new(owner_id: Uuid, fields: ContactFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: fields.name,
            email: fields.email,
            birthday: fields.birthday,
            company: fields.company,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the four business fields and refresh `updated_at`.
    pub fn apply(&mut self, fields: ContactFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.birthday = fields.birthday;
        self.company = fields.company;
        self.touch();
    }

    /// Refresh the update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
