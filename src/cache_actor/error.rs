use thiserror::Error;

/// Errors that can occur while talking to the cache counter.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CacheError {
    #[error("Cache counter overflow for product {0}")]
    Overflow(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
