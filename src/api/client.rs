//! HTTP client for the storefront services
//!
//! Talks to three independent JSON endpoints: domain availability,
//! store creation and the product catalog.

use super::error::ApiError;
use super::models::{CreateStoreRequest, CreateStoreResponse, DomainCheck};
use super::traits::StorefrontApi;
use crate::config::StorefrontConfig;
use crate::state::Product;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde_json::Value;
use url::Url;

/// Longest response excerpt kept in error messages
const MAX_ERROR_BODY: usize = 200;

/// Client for the storefront HTTP services
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    domain_base: Url,
    domain_suffix: String,
    store_url: Url,
    catalog_url: Url,
}

impl StorefrontClient {
    /// Create a client for the endpoints in `config`
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            domain_base: Url::parse(&config.domain_service_base)?,
            domain_suffix: config.domain_suffix.clone(),
            store_url: Url::parse(&config.store_service_url)?,
            catalog_url: Url::parse(&config.catalog_service_url)?,
        })
    }

    /// `{domain_base}/{candidate}.{suffix}`, with the last segment percent-encoded
    fn domain_check_url(&self, candidate: &str) -> Result<Url, ApiError> {
        let mut url = self.domain_base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.domain_base.to_string()))?
            .pop_if_empty()
            .push(&format!("{candidate}.{}", self.domain_suffix));
        Ok(url)
    }
}

/// Turn a non-2xx response into [`ApiError::Status`]
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body: excerpt(&body),
    })
}

fn excerpt(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY {
        body.to_string()
    } else {
        let cut: String = body.chars().take(MAX_ERROR_BODY).collect();
        format!("{cut}...")
    }
}

#[async_trait]
impl StorefrontApi for StorefrontClient {
    async fn check_domain(&self, candidate: &str) -> Result<DomainCheck, ApiError> {
        let url = self.domain_check_url(candidate)?;
        tracing::debug!("Checking domain availability: {url}");

        let response = ensure_success(self.http.get(url).send().await?).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create_store(
        &self,
        request: &CreateStoreRequest,
    ) -> Result<CreateStoreResponse, ApiError> {
        tracing::info!("Creating store {:?} on {}", request.name, request.domain);

        let response = self
            .http
            .post(self.store_url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Err(ApiError::Conflict);
        }
        let response = ensure_success(response).await?;
        let body = response.text().await?;

        let mut parsed = if body.trim().is_empty() {
            CreateStoreResponse::default()
        } else {
            serde_json::from_str(&body).unwrap_or_else(|e| {
                tracing::warn!("Store service returned an unreadable body: {e}");
                CreateStoreResponse::default()
            })
        };
        parsed.http_status = status.as_u16();
        Ok(parsed)
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        tracing::debug!("Fetching catalog from {}", self.catalog_url);

        let response = ensure_success(self.http.get(self.catalog_url.clone()).send().await?).await?;
        let text = response.text().await?;
        let mut body: Value = serde_json::from_str(&text)?;

        match body.get_mut("data").map(Value::take) {
            Some(data @ Value::Array(_)) => Ok(serde_json::from_value(data)?),
            _ => Err(ApiError::UnexpectedResponse(excerpt(&text))),
        }
    }

    async fn find_product(&self, id: &str) -> Result<Product, ApiError> {
        self.list_products()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("product {id}")))
    }
}
