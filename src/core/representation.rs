//! External JSON shape of a contact
//!
//! The stored form never goes over the wire. A [`ContactRepresentation`]
//! renames `id` to `contact_id`, formats the birthday as `MM/DD/YYYY` and
//! renders `updated_at` as human-relative text. Responses wrap one or many
//! representations in a `data` envelope.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::core::contact::{BIRTHDAY_FORMAT, Contact};

/// The external view of a single contact.
#[derive(Debug, Clone, Serialize)]
pub struct ContactRepresentation {
    pub contact_id: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    /// `MM/DD/YYYY`
    pub birthday: String,
    /// Human-relative rendering of `updated_at`, e.g. "3 minutes ago".
    pub last_updated: String,
}

impl ContactRepresentation {
    pub fn of(contact: &Contact) -> Self {
        Self::at(contact, Utc::now())
    }

    /// Render against an explicit clock; `last_updated` depends on "now".
    pub fn at(contact: &Contact, now: DateTime<Utc>) -> Self {
        Self {
            contact_id: contact.id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            company: contact.company.clone(),
            birthday: contact.birthday.format(BIRTHDAY_FORMAT).to_string(),
            last_updated: relative_time(contact.updated_at, now),
        }
    }
}

/// Envelope for single-resource responses.
#[derive(Debug, Serialize)]
pub struct SingleResponse {
    pub data: ContactRepresentation,
}

impl SingleResponse {
    pub fn of(contact: &Contact) -> Self {
        Self {
            data: ContactRepresentation::of(contact),
        }
    }
}

/// Envelope for collection responses.
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub data: Vec<ContactRepresentation>,
}

impl CollectionResponse {
    pub fn of(contacts: &[Contact]) -> Self {
        Self {
            data: contacts.iter().map(ContactRepresentation::of).collect(),
        }
    }
}

/// Render the distance between two instants as "N units ago".
///
/// Granularity steps through seconds, minutes, hours, days, weeks, months
/// and years; a sub-second distance reads "1 second ago". Instants in the
/// future clamp to the smallest step.
pub fn relative_time(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - from).num_seconds().max(0);

    let (count, unit) = if seconds < 60 {
        (seconds.max(1), "second")
    } else if seconds < 3_600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3_600, "hour")
    } else {
        let days = seconds / 86_400;
        if days < 7 {
            (days, "day")
        } else if days < 30 {
            (days / 7, "week")
        } else if days < 365 {
            (days / 30, "month")
        } else {
            (days / 365, "year")
        }
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
