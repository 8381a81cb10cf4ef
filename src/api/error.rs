//! Errors returned by the storefront services

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// HTTP 409 from the store service: the domain was claimed after it was checked
    #[error("domain conflict")]
    Conflict,

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected API response: {0}")]
    UnexpectedResponse(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid service URL: {0}")]
    InvalidUrl(String),
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

impl ApiError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict)
    }
}
