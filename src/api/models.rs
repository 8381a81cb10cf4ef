//! Request and response bodies of the storefront services

use crate::state::{Category, Country, Currency};
use serde::{Deserialize, Serialize};

/// Body of `GET {domain_service_base}/{candidate}.{suffix}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DomainCheck {
    pub taken: bool,
}

/// Body of the store creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateStoreRequest {
    pub name: String,
    pub currency: Currency,
    pub country: Country,
    pub domain: String,
    pub category: Category,
    pub email: String,
}

/// Response of the store creation service
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateStoreResponse {
    /// HTTP status the response arrived with
    #[serde(skip)]
    pub http_status: u16,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default, alias = "succcess")]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}
