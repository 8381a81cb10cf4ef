//! Configuration handling for the storefront client

use crate::api::CreateStoreResponse;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_DOMAIN_SERVICE_BASE: &str =
    "https://interview-task-green.vercel.app/task/domains/check";
const DEFAULT_DOMAIN_SUFFIX: &str = "expressitbd.com";
const DEFAULT_STORE_SERVICE_URL: &str =
    "https://interview-task-green.vercel.app/task/stores/create";
const DEFAULT_CATALOG_SERVICE_URL: &str =
    "https://glore-bd-backend-node-mongo.vercel.app/api/product";

/// How a 2xx store creation response is confirmed as a success
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitSuccessPolicy {
    /// Any 2xx response is a success
    #[default]
    HttpStatus,
    /// The body must report `status == 200` and `success == true`
    BodyFlag,
}

impl SubmitSuccessPolicy {
    pub fn is_success(&self, response: &CreateStoreResponse) -> bool {
        match self {
            Self::HttpStatus => (200..300).contains(&response.http_status),
            Self::BodyFlag => response.status == Some(200) && response.success == Some(true),
        }
    }
}

/// Service endpoints and timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Domain availability endpoint; `/{candidate}.{suffix}` is appended
    pub domain_service_base: String,
    /// Fixed parent domain of every store subdomain
    pub domain_suffix: String,
    /// Store creation endpoint
    pub store_service_url: String,
    /// Product catalog endpoint
    pub catalog_service_url: String,
    /// Quiet period before a domain check fires
    pub debounce_ms: u64,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    pub submit_success_policy: SubmitSuccessPolicy,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            domain_service_base: DEFAULT_DOMAIN_SERVICE_BASE.to_string(),
            domain_suffix: DEFAULT_DOMAIN_SUFFIX.to_string(),
            store_service_url: DEFAULT_STORE_SERVICE_URL.to_string(),
            catalog_service_url: DEFAULT_CATALOG_SERVICE_URL.to_string(),
            debounce_ms: 600,
            request_timeout_secs: 10,
            submit_success_policy: SubmitSuccessPolicy::default(),
        }
    }
}

impl StorefrontConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "storefront", "storefront-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load from the platform config file (if any), then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: StorefrontConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Override endpoints from `STOREFRONT_*` variables
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let overrides: [(&str, &mut String); 4] = [
            ("STOREFRONT_DOMAIN_API", &mut self.domain_service_base),
            ("STOREFRONT_DOMAIN_SUFFIX", &mut self.domain_suffix),
            ("STOREFRONT_STORE_API", &mut self.store_service_url),
            ("STOREFRONT_CATALOG_API", &mut self.catalog_service_url),
        ];
        for (key, slot) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                *slot = value;
            }
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
