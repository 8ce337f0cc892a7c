use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::app_system::{SystemConfig, SystemError};
use crate::cache_actor::CacheCounterService;
use crate::clients::{CacheClient, OrderClient, ProductClient};
use crate::domain::{Order, OrderId, Product, ProductId};
use crate::notification::{NoopSink, NotificationSink};
use crate::placer::OrderPlacer;

/// The main application system that owns every actor.
///
/// Starts the stores and the cache counter, wires their clients into the
/// [`OrderPlacer`], and shuts everything down again.
pub struct OrderSystem {
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub cache_client: CacheClient,
    pub placer: OrderPlacer,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids handed out by a store, starting at 1.
fn sequential_ids<I: 'static>(make: fn(u64) -> I) -> impl Fn() -> I + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || make(counter.fetch_add(1, Ordering::SeqCst))
}

impl OrderSystem {
    /// Starts a system with default settings and an inert notification sink.
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default(), Arc::new(NoopSink))
    }

    /// **Startup Order:**
    /// 1. Start the leaf actors (product store, order store, cache counter)
    /// 2. Build the placer from their clients
    #[instrument(name = "order_system", skip(sink))]
    pub fn with_config(config: &SystemConfig, sink: Arc<dyn NotificationSink>) -> Self {
        info!("Starting order system");
        let mut handles = Vec::new();

        let (product_actor, product_inner) = ResourceActor::<Product>::new(config.buffer_size, sequential_ids(ProductId));
        handles.push(tokio::spawn(product_actor.run()));
        let product_client = ProductClient::new(product_inner);

        let (order_actor, order_inner) = ResourceActor::<Order>::new(config.buffer_size, sequential_ids(OrderId));
        handles.push(tokio::spawn(order_actor.run()));
        let order_client = OrderClient::new(order_inner);

        let (cache_service, cache_client) = CacheCounterService::new(config.buffer_size);
        handles.push(tokio::spawn(cache_service.run()));

        let placer = OrderPlacer::new(product_client.clone(), order_client.clone(), cache_client.clone(), sink);

        info!("Order system started successfully");

        Self {
            product_client,
            order_client,
            cache_client,
            placer,
            handles,
        }
    }

    /// Gracefully shutdown the entire system
    ///
    /// Deferred cache increments already queued ahead of the shutdown message are
    /// still applied; later ones fail and count as drift.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down order system");

        // Shutdown errors only mean the actor is already gone
        let _ = self.order_client.shutdown().await;
        let _ = self.product_client.shutdown().await;
        let _ = self.cache_client.shutdown().await;

        // Wait for every actor even if one of them failed
        let mut result = Ok(());
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                if result.is_ok() {
                    result = Err(SystemError::ActorTaskFailed(e.to_string()));
                }
            }
        }

        if result.is_ok() {
            info!("Order system shutdown complete");
        }
        result
    }
}
