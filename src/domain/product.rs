use serde::{Deserialize, Serialize};

use super::ProductId;

/// Represents a product in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in minor currency units.
    pub price: u64,
    pub description: String,
    pub thumb_image_url: String,
    pub image_url: String,
    pub comment_count: u32,
    /// Number of successful orders. Only ever grows, one increment per order.
    pub buy_count: u64,
}

/// Payload for registering a new product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: u64,
    pub description: String,
    pub thumb_image_url: String,
    pub image_url: String,
    pub comment_count: u32,
    pub buy_count: u64,
}

impl ProductCreate {
    /// Creates a payload with the fields an order snapshot needs; the rest default.
    ///
    /// # Arguments
    /// * `name` - Display name, must not be empty
    /// * `price` - Price in minor currency units
    /// * `image_url` - Image copied into orders placed for this product
    pub fn new(name: impl Into<String>, price: u64, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image_url: image_url.into(),
            ..Self::default()
        }
    }
}

/// Payload for editing a product. The buy count is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
