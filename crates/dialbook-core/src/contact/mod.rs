//! Contact management: domain model, validation, and storage.

mod model;
mod repository;
mod validation;

pub use model::{Contact, ContactDraft, ContactId};
pub use repository::ContactRepository;
pub use validation::{ValidationError, ValidationResult, validate_draft};
