use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::cache_actor::CacheError;
use crate::domain::ProductId;
use crate::messages::CacheRequest;

/// Client for the cache counter service.
#[derive(Clone)]
pub struct CacheClient {
    sender: mpsc::Sender<CacheRequest>,
}

impl CacheClient {
    pub fn new(sender: mpsc::Sender<CacheRequest>) -> Self {
        Self { sender }
    }

    /// Manual method for the one request that expects no response
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CacheError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CacheRequest::Shutdown)
            .await
            .map_err(|_| CacheError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(CacheClient => fn increment(product_id: ProductId) -> u64 as CacheRequest::Increment, Error = CacheError);
client_method!(CacheClient => fn get_count(product_id: ProductId) -> u64 as CacheRequest::GetCount, Error = CacheError);

// Test-only messages for inspecting and seeding the service's internal state
#[cfg(test)]
client_method!(CacheClient => fn get_entry_count() -> usize as CacheRequest::GetEntryCount, Error = CacheError);
#[cfg(test)]
client_method!(CacheClient => fn seed_count(product_id: ProductId, count: u64) -> () as CacheRequest::SeedCount, Error = CacheError);
