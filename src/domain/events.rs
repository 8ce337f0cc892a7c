use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Order, OrderId, ProductId};

/// Published once an order has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub order_price: u64,
    pub thum_image_url: String,
    pub created_at: DateTime<Utc>,
}

impl OrderCreatedEvent {
    /// Message body for downstream consumers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&Order> for OrderCreatedEvent {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            product_id: order.product_id,
            order_price: order.order_price,
            thum_image_url: order.thum_image_url.clone(),
            created_at: order.created_at,
        }
    }
}
