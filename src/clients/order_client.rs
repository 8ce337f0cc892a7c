use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Order, OrderDraft, OrderId, OrderPage, PayStatus};
use crate::order_actor::{OrderAction, OrderError};

/// Client for the order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderId, OrderError, order);

impl OrderClient {
    /// Writes a new order. Either the whole order is stored and returned with its
    /// assigned id, or nothing is stored.
    #[instrument(skip(self, draft), fields(product_id = %draft.product_id, order_price = draft.order_price))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(OrderError::from)
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get_order(id).await?.ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Lists orders newest first. `page` is 1-based.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, page: usize, size: usize) -> Result<OrderPage, OrderError> {
        debug!("Sending request");
        if page == 0 || size == 0 {
            return Err(OrderError::ValidationError(format!(
                "page and size must be positive (page {page}, size {size})"
            )));
        }
        let offset = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(size))
            .ok_or_else(|| OrderError::ValidationError(format!("page {page} of size {size} is out of range")))?;

        let mut orders = self.inner.list().await.map_err(OrderError::from)?;
        orders.sort_unstable_by(|a, b| b.id.cmp(&a.id));
        let total_elements = orders.len();
        let orders = orders.into_iter().skip(offset).take(size).collect();

        Ok(OrderPage { orders, page, size, total_elements })
    }

    #[instrument(skip(self))]
    pub async fn transition_pay_status(&self, id: OrderId, next: PayStatus) -> Result<PayStatus, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::TransitionPayStatus(next))
            .await
            .map_err(|e| match e {
                FrameworkError::Rejected { reason, .. } => OrderError::InvalidTransition(reason),
                other => OrderError::from(other),
            })
    }
}
