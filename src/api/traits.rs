//! Trait abstraction for the storefront services to enable mocking in tests

use super::error::ApiError;
use super::models::{CreateStoreRequest, CreateStoreResponse, DomainCheck};
use crate::state::Product;
use async_trait::async_trait;

/// Remote operations used by the wizard and catalog screens
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Ask whether `{candidate}.{suffix}` is already claimed
    async fn check_domain(&self, candidate: &str) -> Result<DomainCheck, ApiError>;

    /// Create a store; HTTP 409 maps to [`ApiError::Conflict`]
    async fn create_store(
        &self,
        request: &CreateStoreRequest,
    ) -> Result<CreateStoreResponse, ApiError>;

    /// Fetch the whole product catalog
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Fetch the catalog and pick one product by id
    async fn find_product(&self, id: &str) -> Result<Product, ApiError>;
}
