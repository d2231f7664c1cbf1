//! Domain core: the contact record, the rules around it, and the contracts
//! the HTTP surface and storage backends plug into

pub mod auth;
pub mod contact;
pub mod error;
pub mod policy;
pub mod representation;
pub mod store;
pub mod validation;

pub use auth::{Actor, AuthProvider};
pub use contact::{Contact, ContactFields};
pub use error::ApiError;
pub use store::ContactStore;
