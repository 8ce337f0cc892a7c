pub mod ids;
pub mod product;
pub mod order;
pub mod pay_status;
pub mod events;

pub use ids::*;
pub use product::*;
pub use order::*;
pub use pay_status::*;
pub use events::*;
