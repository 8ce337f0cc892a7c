//! Product store: records, buy-count increments and the store's error type.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
