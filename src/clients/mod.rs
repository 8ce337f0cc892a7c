//! Typed handles for the store and cache actors.

#[macro_use]
mod macros;

pub mod cache_client;
pub mod order_client;
pub mod product_client;

pub use cache_client::*;
pub use order_client::*;
pub use product_client::*;
