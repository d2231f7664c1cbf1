//! Authorization policy for contact operations
//!
//! One pure decision function over a closed action set, evaluated before
//! validation and before any store mutation. Collection-level actions
//! (`ViewAny`, `Create`) have no target; record-level actions require the
//! resolved contact and allow only its owner.

use crate::core::auth::Actor;
use crate::core::contact::Contact;

/// The closed set of operations on contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    ViewAny,
    Create,
    View,
    Update,
    Delete,
}

/// Decide whether `actor` may perform `action` on `target`.
///
/// Listing is allowed for every authenticated actor because the store
/// already scopes results to the actor's own contacts; the policy never
/// widens visibility.
pub fn can(actor: &Actor, action: ContactAction, target: Option<&Contact>) -> bool {
    match action {
        ContactAction::ViewAny | ContactAction::Create => true,
        ContactAction::View | ContactAction::Update | ContactAction::Delete => {
            target.is_some_and(|contact| contact.owner_id == actor.id)
        }
    }
}
