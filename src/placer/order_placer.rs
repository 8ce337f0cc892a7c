use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn, Instrument};

use crate::clients::{CacheClient, OrderClient, ProductClient};
use crate::domain::{Order, OrderCreatedEvent, OrderDraft, Product, ProductId};
use crate::notification::NotificationSink;
use crate::placer::{PlaceMode, PlaceOrderError};
use crate::product_actor::ProductError;

/// Places orders against products and keeps the buy-count signals moving.
///
/// The placer holds no locks of its own. Each store serialises access to its own
/// records, and the placer only decides in which order it talks to them.
#[derive(Clone)]
pub struct OrderPlacer {
    product_client: ProductClient,
    order_client: OrderClient,
    cache_client: CacheClient,
    sink: Arc<dyn NotificationSink>,
    counter_drift: Arc<AtomicU64>,
}

impl OrderPlacer {
    pub fn new(
        product_client: ProductClient,
        order_client: OrderClient,
        cache_client: CacheClient,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            product_client,
            order_client,
            cache_client,
            sink,
            counter_drift: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of deferred cache increments that failed after their order was stored.
    pub fn counter_drift(&self) -> u64 {
        self.counter_drift.load(Ordering::SeqCst)
    }

    /// Places one order for `product_id` and returns it as stored.
    ///
    /// The product is always read before anything is written. A missing product
    /// fails the call with no side effects at all.
    #[instrument(fields(product_id = %product_id, mode = %mode), skip(self))]
    pub async fn place_order(&self, product_id: ProductId, mode: PlaceMode) -> Result<Order, PlaceOrderError> {
        info!("Processing place_order request");

        let product = self.read_product(product_id).await?;

        let order = match mode {
            PlaceMode::Consistent => {
                self.increment_counters(product_id).await?;
                self.write_order(&product).await?
            }
            PlaceMode::Deferred => {
                let order = self.write_order(&product).await?;
                self.spawn_cache_increment(product_id);
                order
            }
        };

        self.sink.publish(OrderCreatedEvent::from(&order));
        info!(order_id = %order.id, order_price = order.order_price, "Order placed");
        Ok(order)
    }

    async fn read_product(&self, product_id: ProductId) -> Result<Product, PlaceOrderError> {
        match self.product_client.get_product(product_id).await {
            Ok(Some(product)) => {
                debug!(product_name = %product.name, price = product.price, "Product found");
                Ok(product)
            }
            Ok(None) => {
                error!("Product not found");
                Err(PlaceOrderError::ProductNotFound(product_id))
            }
            Err(e) => {
                error!(error = %e, "Product read failed");
                Err(PlaceOrderError::ProductStoreUnavailable(e.to_string()))
            }
        }
    }

    // Consistent mode: both counters before the order write, durable one first.
    async fn increment_counters(&self, product_id: ProductId) -> Result<(), PlaceOrderError> {
        let buy_count = self.product_client.increment_buy_count(product_id).await.map_err(|e| {
            error!(error = %e, "Buy count update failed");
            match e {
                ProductError::NotFound(_) => PlaceOrderError::ProductNotFound(product_id),
                other => PlaceOrderError::CounterUpdateFailed { product_id, reason: other.to_string() },
            }
        })?;

        let cached = self.cache_client.increment(product_id).await.map_err(|e| {
            error!(error = %e, "Cache counter update failed");
            PlaceOrderError::CounterUpdateFailed { product_id, reason: e.to_string() }
        })?;

        debug!(buy_count, cached, "Counters incremented");
        Ok(())
    }

    async fn write_order(&self, product: &Product) -> Result<Order, PlaceOrderError> {
        self.order_client
            .create_order(OrderDraft::snapshot(product))
            .await
            .map_err(|e| {
                error!(error = %e, "Order write failed");
                PlaceOrderError::OrderWriteFailed(e.to_string())
            })
    }

    // Deferred mode: runs after the order write has returned, off the caller's path.
    fn spawn_cache_increment(&self, product_id: ProductId) {
        let cache_client = self.cache_client.clone();
        let counter_drift = Arc::clone(&self.counter_drift);

        tokio::spawn(
            async move {
                match cache_client.increment(product_id).await {
                    Ok(count) => debug!(count, "Deferred cache counter updated"),
                    Err(e) => {
                        counter_drift.fetch_add(1, Ordering::SeqCst);
                        warn!(error = %e, "Deferred cache counter update failed, counter drifted");
                    }
                }
            }
            .in_current_span(),
        );
    }
}
