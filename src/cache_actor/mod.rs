//! Fast per-product buy counters, kept apart from the product store.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
