//! Order store: persisted orders and their payment status transitions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
