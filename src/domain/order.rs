use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{OrderId, PayStatus, Product, ProductId};

/// Represents a placed order.
///
/// `order_price` and `thum_image_url` are copies taken from the product when the
/// order was created. They are never re-read from the product afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub order_price: u64,
    pub thum_image_url: String,
    pub pay_status: PayStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub product_id: ProductId,
    pub order_price: u64,
    pub thum_image_url: String,
}

impl OrderDraft {
    /// Snapshots the price and image of `product` as they are right now.
    pub fn snapshot(product: &Product) -> Self {
        Self {
            product_id: product.id,
            order_price: product.price,
            thum_image_url: product.image_url.clone(),
        }
    }
}

/// One page of orders, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPage {
    pub orders: Vec<Order>,
    /// 1-based page number.
    pub page: usize,
    pub size: usize,
    pub total_elements: usize,
}

impl OrderPage {
    /// Zero for a page with no size.
    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(size: usize, total_elements: usize) -> OrderPage {
        OrderPage { orders: Vec::new(), page: 1, size, total_elements }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(page(2, 0).total_pages(), 0);
        assert_eq!(page(2, 3).total_pages(), 2);
        assert_eq!(page(2, 4).total_pages(), 2);
        assert_eq!(page(0, 3).total_pages(), 0);
    }
}
