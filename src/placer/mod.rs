//! Order placement: the one business transaction of the crate.

pub mod error;
pub mod mode;
pub mod order_placer;

pub use error::*;
pub use mode::*;
pub use order_placer::*;
