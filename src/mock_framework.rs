//! # Mock Framework
//!
//! Utilities for testing clients and the order placer in isolation.
//!
//! Use [`create_mock_client`] or [`create_mock_cache_client`] to get a client and a
//! receiver. Then use helpers like [`expect_get`] or [`expect_increment`] to assert
//! what was sent, in which order, and to answer with success or failure.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::cache_actor::CacheError;
use crate::clients::CacheClient;
use crate::domain::ProductId;
use crate::messages::CacheRequest;

/// Creates a mock client and a receiver for asserting requests.
///
/// Nothing answers on the other side until the test does, so every step of a
/// multi-store flow can be held, inspected and answered deterministically.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Same as [`create_mock_client`], for the cache counter service.
pub fn create_mock_cache_client(buffer_size: usize) -> (CacheClient, mpsc::Receiver<CacheRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CacheClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next cache message is an Increment request
pub async fn expect_increment(
    receiver: &mut mpsc::Receiver<CacheRequest>,
) -> Option<(ProductId, oneshot::Sender<Result<u64, CacheError>>)> {
    match receiver.recv().await {
        Some(CacheRequest::Increment { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{OrderClient, ProductClient};
    use crate::domain::{Order, OrderId, PayStatus, Product, ProductCreate};
    use crate::order_actor::{OrderAction, OrderError};
    use chrono::Utc;

    fn order(id: u64) -> Order {
        Order {
            id: OrderId(id),
            product_id: ProductId(1),
            order_price: 100,
            thum_image_url: String::new(),
            pay_status: PayStatus::Queued,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_mock_product_client() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let create_task = tokio::spawn(async move { client.create_product(ProductCreate::new("Test", 5, "t.png")).await });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        let product = Product::from_create_params(ProductId(1), params).unwrap();
        responder.send(Ok(product.clone())).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(product));
    }

    #[tokio::test]
    async fn test_list_orders_sorts_newest_first_and_pages() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let list_task = tokio::spawn(async move { client.list_orders(1, 2).await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(Ok(vec![order(2), order(5), order(1)])).unwrap();

        let page = list_task.await.unwrap().unwrap();
        let ids: Vec<OrderId> = page.orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![OrderId(5), OrderId(2)]);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages(), 2);
    }

    #[tokio::test]
    async fn test_rejected_transition_is_reported_as_such() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let task = tokio::spawn(async move { client.transition_pay_status(OrderId(1), PayStatus::Completed).await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, OrderId(1));
        assert_eq!(action, OrderAction::TransitionPayStatus(PayStatus::Completed));
        responder
            .send(Err(FrameworkError::Rejected { entity: "order", reason: "Queued -> Completed".into() }))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(OrderError::InvalidTransition("Queued -> Completed".into()))
        );
    }

    #[tokio::test]
    async fn test_invalid_page_never_reaches_the_store() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        assert!(matches!(client.list_orders(0, 10).await, Err(OrderError::ValidationError(_))));
        assert!(matches!(client.list_orders(1, 0).await, Err(OrderError::ValidationError(_))));
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_rejected_without_panicking() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        assert!(matches!(client.list_orders(usize::MAX, 2).await, Err(OrderError::ValidationError(_))));
        assert!(receiver.try_recv().is_err());

        // Largest offset that still fits is accepted and yields an empty page
        let list_task = tokio::spawn(async move { client.list_orders(usize::MAX, 1).await });
        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(Ok(vec![order(1)])).unwrap();

        let page = list_task.await.unwrap().unwrap();
        assert!(page.orders.is_empty());
        assert_eq!(page.total_elements, 1);
    }
}
