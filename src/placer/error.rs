use thiserror::Error;

use crate::domain::ProductId;

/// Why an order could not be placed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlaceOrderError {
    /// Nothing was written: no counter and no order.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
    #[error("Product store unavailable: {0}")]
    ProductStoreUnavailable(String),
    /// Consistent mode only. The order was not written; an increment that
    /// succeeded before the failing one is not undone.
    #[error("Counter update failed for product {product_id}: {reason}")]
    CounterUpdateFailed { product_id: ProductId, reason: String },
    /// The order was not stored. In consistent mode the counters already include it.
    #[error("Order write failed: {0}")]
    OrderWriteFailed(String),
}
