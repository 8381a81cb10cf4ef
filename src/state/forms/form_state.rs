//! Store creation form state and validation rules

use super::field::{FormFieldId, FormFocus};
use super::options::{Category, ChoiceOption, Country, Currency};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const MSG_DOMAIN_AVAILABLE: &str = "Domain is available.";
pub const MSG_DOMAIN_TAKEN: &str = "Domain already taken. Please try another.";
pub const MSG_DOMAIN_CHECK_FAILED: &str = "Something went wrong!";
pub const MSG_STORE_NAME_SHORT: &str = "Store name must be at least 3 characters long";
pub const MSG_DOMAIN_SHORT: &str = "Domain must be at least 3 characters long";
pub const MSG_EMAIL_INVALID: &str = "Invalid email format";
pub const MSG_DOMAIN_NOT_AVAILABLE: &str = "Not Available Domain, Re-enter!";
pub const MSG_DOMAIN_CONFLICT: &str = "This domain is already taken. Try a different one.";
pub const MSG_SUBMIT_FAILED: &str = "Something went wrong. Please try again.";

/// Minimum length (in characters) of store name and domain
pub const MIN_FIELD_LEN: usize = 3;

/// Result of the most recent availability check for the current candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainStatus {
    /// Candidate too short to check, or nothing typed yet
    #[default]
    Unchecked,
    /// A check is scheduled or in flight
    Pending,
    Available,
    Taken,
    /// The check failed; not submittable until a new check succeeds
    Error,
}

impl DomainStatus {
    pub fn is_submittable(&self) -> bool {
        matches!(self, Self::Available)
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Returns true if `email` looks like `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Per-field validation messages
pub type ValidationErrors = BTreeMap<FormFieldId, String>;

/// All state of the store creation screen.
///
/// Only [`StoreFormController`](super::StoreFormController) mutates this.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub store_name: String,
    pub domain_candidate: String,
    pub domain_status: DomainStatus,
    pub domain_message: Option<String>,
    pub country: Country,
    pub category: Category,
    pub currency: Currency,
    pub contact_email: String,
    pub validation_errors: ValidationErrors,
    pub is_submitting: bool,
    pub focus: FormFocus,
    /// Set when a field changed after the last validation run
    pub validation_stale: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            focus: FormFocus::first(),
            ..Default::default()
        }
    }

    /// Text value of a text field, `None` for choice fields
    pub fn text(&self, field: FormFieldId) -> Option<&str> {
        match field {
            FormFieldId::StoreName => Some(&self.store_name),
            FormFieldId::Domain => Some(&self.domain_candidate),
            FormFieldId::Email => Some(&self.contact_email),
            FormFieldId::Country | FormFieldId::Category | FormFieldId::Currency => None,
        }
    }

    /// Display value of any field
    pub fn display_value(&self, field: FormFieldId) -> &str {
        match field {
            FormFieldId::Country => self.country.label(),
            FormFieldId::Category => self.category.label(),
            FormFieldId::Currency => self.currency.label(),
            _ => self.text(field).unwrap_or_default(),
        }
    }

    pub fn error(&self, field: FormFieldId) -> Option<&str> {
        self.validation_errors.get(&field).map(String::as_str)
    }

    /// Run the submit-time validation rules.
    ///
    /// Replaces `validation_errors` and returns true if there are none.
    pub fn validate(&mut self) -> bool {
        let mut errors = ValidationErrors::new();

        if self.store_name.chars().count() < MIN_FIELD_LEN {
            errors.insert(FormFieldId::StoreName, MSG_STORE_NAME_SHORT.to_string());
        }
        if self.domain_candidate.chars().count() < MIN_FIELD_LEN {
            errors.insert(FormFieldId::Domain, MSG_DOMAIN_SHORT.to_string());
        }
        if !is_valid_email(&self.contact_email) {
            errors.insert(FormFieldId::Email, MSG_EMAIL_INVALID.to_string());
        }
        if self.domain_status == DomainStatus::Taken {
            errors.insert(FormFieldId::Domain, MSG_DOMAIN_NOT_AVAILABLE.to_string());
        }

        self.validation_errors = errors;
        self.validation_stale = false;
        self.validation_errors.is_empty()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.domain_status.is_submittable()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Creating..."
        } else {
            "Create store"
        }
    }
}
