//! Product catalog records

use serde::{Deserialize, Deserializer};

/// Shown when a product has no images
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// A hosted image or video
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Media {
    #[serde(rename = "secure_url", alias = "url")]
    pub url: String,
}

/// Product information
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "price_from_string_or_number")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Media>,
    #[serde(default)]
    pub video: Option<Media>,
}

impl Product {
    /// URL of the first image, or the placeholder
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(|m| m.url.as_str())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn video_url(&self) -> Option<&str> {
        self.video.as_ref().map(|v| v.url.as_str())
    }

    pub fn display_price(&self) -> String {
        if self.price.is_empty() {
            "N/A".to_string()
        } else {
            format!("${}", self.price)
        }
    }
}

/// The catalog sends prices as strings; tolerate numbers too.
fn price_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Price>::deserialize(deserializer)? {
        Some(Price::Text(s)) => s,
        Some(Price::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Catalog records carry explicit nulls; read them as the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
