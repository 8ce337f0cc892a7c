//! Where placed orders are announced to downstream consumers.
//!
//! Publishing is fire-and-forget: a sink must return promptly and may never make
//! order placement fail. Delivery problems are logged and dropped.

use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::domain::OrderCreatedEvent;

/// Receives an event for every order the placer persisted.
pub trait NotificationSink: Send + Sync {
    fn publish(&self, event: OrderCreatedEvent);
}

/// Inert sink. The default until a downstream consumer exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl NotificationSink for NoopSink {
    fn publish(&self, event: OrderCreatedEvent) {
        trace!(order_id = %event.order_id, "Order event discarded");
    }
}

/// Logs the JSON message body of each event under the given topic.
#[derive(Debug, Clone)]
pub struct LogSink {
    topic: String,
}

impl LogSink {
    pub fn new(topic: impl Into<String>) -> Self {
        Self { topic: topic.into() }
    }
}

impl NotificationSink for LogSink {
    fn publish(&self, event: OrderCreatedEvent) {
        match event.to_json() {
            Ok(payload) => info!(topic = %self.topic, payload = %payload, "Order event published"),
            Err(e) => warn!(topic = %self.topic, error = %e, "Order event could not be encoded"),
        }
    }
}

/// Hands events to an in-process consumer over a bounded channel.
///
/// Uses `try_send`, so a full or closed channel drops the event instead of
/// blocking the caller.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::Sender<OrderCreatedEvent>,
}

impl ChannelSink {
    pub fn new(buffer_size: usize) -> (Self, mpsc::Receiver<OrderCreatedEvent>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { sender }, receiver)
    }
}

impl NotificationSink for ChannelSink {
    fn publish(&self, event: OrderCreatedEvent) {
        let order_id = event.order_id;
        match self.sender.try_send(event) {
            Ok(()) => debug!(order_id = %order_id, "Order event queued"),
            Err(e) => warn!(order_id = %order_id, error = %e, "Order event dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderId, ProductId};
    use chrono::Utc;

    fn event(id: u64) -> OrderCreatedEvent {
        OrderCreatedEvent {
            order_id: OrderId(id),
            product_id: ProductId(7),
            order_price: 1000,
            thum_image_url: "x.png".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_channel_sink_delivers_events() {
        let (sink, mut receiver) = ChannelSink::new(4);

        sink.publish(event(1));

        assert_eq!(receiver.recv().await.map(|e| e.order_id), Some(OrderId(1)));
    }

    #[tokio::test]
    async fn test_channel_sink_never_blocks() {
        let (sink, mut receiver) = ChannelSink::new(1);

        sink.publish(event(1));
        sink.publish(event(2));

        assert_eq!(receiver.recv().await.map(|e| e.order_id), Some(OrderId(1)));
        assert!(receiver.try_recv().is_err());

        drop(receiver);
        sink.publish(event(3));
    }
}
