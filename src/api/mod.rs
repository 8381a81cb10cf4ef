//! Storefront service clients for HTTP communication

mod client;
mod error;
mod models;
mod traits;

pub use client::StorefrontClient;
pub use error::ApiError;
pub use models::{CreateStoreRequest, CreateStoreResponse, DomainCheck};
pub use traits::StorefrontApi;

#[cfg(test)]
pub use traits::MockStorefrontApi;
