use std::sync::Arc;

use order_placer::app_system::{setup_tracing, OrderSystem, SystemConfig};
use order_placer::domain::{PayStatus, ProductCreate, ProductId, ProductPatch};
use order_placer::notification::LogSink;
use order_placer::placer::PlaceMode;
use tracing::{error, info, Instrument};

const ORDER_TOPIC: &str = "order-created";
const UNKNOWN_PRODUCT: ProductId = ProductId(999);

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env();
    setup_tracing(&config);

    info!("Starting application with complete order system");

    let system = OrderSystem::with_config(&config, Arc::new(LogSink::new(ORDER_TOPIC)));

    let product = system
        .product_client
        .create_product(ProductCreate::new("Desk Lamp", 1000, "lamp.png"))
        .await
        .map_err(|e| e.to_string())?;
    info!(product_id = %product.id, "Product created successfully");

    let span = tracing::info_span!("order_processing");
    let placed = async {
        let consistent = system.placer.place_order(product.id, PlaceMode::Consistent).await;
        let deferred = system.placer.place_order(product.id, PlaceMode::Deferred).await;
        (consistent, deferred)
    }
    .instrument(span)
    .await;

    match placed {
        (Ok(first), Ok(second)) => {
            info!(first = %first.id, second = %second.id, "Orders placed successfully");

            system
                .order_client
                .transition_pay_status(first.id, PayStatus::Processing)
                .await
                .map_err(|e| e.to_string())?;
        }
        (first, second) => {
            if let Err(e) = first {
                error!(error = %e, "Consistent order failed");
            }
            if let Err(e) = second {
                error!(error = %e, "Deferred order failed");
            }
        }
    }

    // Orders keep the price they were placed at
    system
        .product_client
        .update_product(product.id, ProductPatch { price: Some(1200), ..ProductPatch::default() })
        .await
        .map_err(|e| e.to_string())?;

    if let Err(e) = system.placer.place_order(UNKNOWN_PRODUCT, PlaceMode::Consistent).await {
        info!(error = %e, "Order for an unknown product rejected");
    }

    let page = system.order_client.list_orders(1, 10).await.map_err(|e| e.to_string())?;
    for order in &page.orders {
        info!(order_id = %order.id, order_price = order.order_price, pay_status = %order.pay_status, "Order");
    }

    let cached = system.cache_client.get_count(product.id).await.map_err(|e| e.to_string())?;
    info!(cached, drift = system.placer.counter_drift(), "Cache counter");

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
