use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::cache_actor::CacheError;
use crate::clients::CacheClient;
use crate::domain::ProductId;
use crate::messages::{CacheRequest, ServiceResponse};

/// Keeps an eventually consistent mirror of per-product buy counts.
///
/// The counters are only ever incremented. Nothing reconciles them with the
/// product store, so a lost increment stays lost.
pub struct CacheCounterService {
    receiver: mpsc::Receiver<CacheRequest>,
    counts: HashMap<ProductId, u64>,
}

impl CacheCounterService {
    pub fn new(buffer_size: usize) -> (Self, CacheClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            counts: HashMap::new(),
        };
        (service, CacheClient::new(sender))
    }

    #[instrument(name = "cache_counter_service", skip(self))]
    pub async fn run(mut self) {
        info!("CacheCounterService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CacheRequest::Increment { product_id, respond_to } => {
                    self.handle_increment(product_id, respond_to);
                }
                CacheRequest::GetCount { product_id, respond_to } => {
                    self.handle_get_count(product_id, respond_to);
                }
                CacheRequest::Shutdown => {
                    info!("CacheCounterService shutting down");
                    break;
                }
                #[cfg(test)]
                CacheRequest::GetEntryCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.counts.len()));
                }
                #[cfg(test)]
                CacheRequest::SeedCount { product_id, count, respond_to } => {
                    self.counts.insert(product_id, count);
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!("CacheCounterService stopped");
    }

    #[instrument(fields(product_id = %product_id), skip(self, respond_to))]
    fn handle_increment(&mut self, product_id: ProductId, respond_to: ServiceResponse<u64, CacheError>) {
        debug!("Processing increment request");

        let count = self.counts.entry(product_id).or_insert(0);
        let result = match count.checked_add(1) {
            Some(next) => {
                *count = next;
                debug!(count = next, "Counter incremented");
                Ok(next)
            }
            None => {
                error!("Counter overflow");
                Err(CacheError::Overflow(product_id.to_string()))
            }
        };

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %product_id), skip(self, respond_to))]
    fn handle_get_count(&self, product_id: ProductId, respond_to: ServiceResponse<u64, CacheError>) {
        debug!("Processing get_count request");
        let count = self.counts.get(&product_id).copied().unwrap_or(0);
        let _ = respond_to.send(Ok(count));
    }
}
