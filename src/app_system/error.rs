use thiserror::Error;

/// Errors raised while running the system as a whole.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}
