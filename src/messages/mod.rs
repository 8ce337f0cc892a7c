use tokio::sync::oneshot;

use crate::cache_actor::CacheError;
use crate::domain::ProductId;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the cache counter service. Each variant includes parameters
/// and a oneshot channel for responses.
#[derive(Debug)]
pub enum CacheRequest {
    Increment {
        product_id: ProductId,
        respond_to: ServiceResponse<u64, CacheError>,
    },
    GetCount {
        product_id: ProductId,
        respond_to: ServiceResponse<u64, CacheError>,
    },
    Shutdown,
    #[cfg(test)]
    GetEntryCount {
        respond_to: ServiceResponse<usize, CacheError>,
    },
    #[cfg(test)]
    SeedCount {
        product_id: ProductId,
        count: u64,
        respond_to: ServiceResponse<(), CacheError>,
    },
}
