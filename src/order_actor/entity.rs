use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderDraft, OrderId, PayStatus};
use super::actions::OrderAction;

impl Entity for Order {
    const NAME: &'static str = "order";

    type Id = OrderId;
    type CreateParams = OrderDraft;
    type Patch = (); // Orders are immutable once written
    type Action = OrderAction;
    type ActionResult = PayStatus;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Creates a new Order from a draft.
    ///
    /// # Notes
    /// The order starts `Queued` and is stamped with the current time.
    fn from_create_params(id: OrderId, draft: OrderDraft) -> Result<Self, String> {
        Ok(Self {
            id,
            product_id: draft.product_id,
            order_price: draft.order_price,
            thum_image_url: draft.thum_image_url,
            pay_status: PayStatus::Queued,
            created_at: Utc::now(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Err(format!("Order {} cannot be modified", self.id))
    }

    fn on_delete(&self) -> Result<(), String> {
        Err(format!("Order {} cannot be deleted", self.id))
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<PayStatus, String> {
        match action {
            OrderAction::TransitionPayStatus(next) => {
                if !self.pay_status.can_transition_to(next) {
                    return Err(format!("{} -> {}", self.pay_status, next));
                }
                self.pay_status = next;
                Ok(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductId;

    fn order() -> Order {
        let draft = OrderDraft {
            product_id: ProductId(7),
            order_price: 1000,
            thum_image_url: "x.png".to_string(),
        };
        Order::from_create_params(OrderId(1), draft).unwrap()
    }

    #[test]
    fn test_new_order_is_queued() {
        let order = order();
        assert_eq!(order.pay_status, PayStatus::Queued);
        assert_eq!(order.order_price, 1000);
    }

    #[test]
    fn test_pay_status_transitions() {
        let mut order = order();

        assert_eq!(order.handle_action(OrderAction::TransitionPayStatus(PayStatus::Processing)), Ok(PayStatus::Processing));
        assert_eq!(order.handle_action(OrderAction::TransitionPayStatus(PayStatus::Completed)), Ok(PayStatus::Completed));
        assert_eq!(
            order.handle_action(OrderAction::TransitionPayStatus(PayStatus::Error)),
            Err("Completed -> Error".to_string())
        );
        assert_eq!(order.pay_status, PayStatus::Completed);
    }

    #[test]
    fn test_orders_are_immutable() {
        let mut order = order();
        assert!(order.on_update(()).is_err());
        assert!(order.on_delete().is_err());
    }
}
