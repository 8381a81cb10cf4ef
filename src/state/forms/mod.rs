//! Form domain layer
//!
//! Type-safe state and behaviour of the store creation form.

mod controller;
mod field;
mod form_state;
mod options;

pub use controller::{FormOutcome, StoreFormController};
pub use field::{FieldKind, FormFieldId, FormFocus};
pub use form_state::{DomainStatus, FormState};
pub use options::{Category, Country, Currency};

#[cfg(test)]
pub use form_state::{MSG_DOMAIN_AVAILABLE, MSG_EMAIL_INVALID};
