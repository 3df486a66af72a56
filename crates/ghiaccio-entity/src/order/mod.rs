//! Order entity: model, ice type, status, and list query types.

pub mod ice_type;
pub mod model;
pub mod query;
pub mod status;

pub use ice_type::IceType;
pub use model::{CreateOrder, Order, OrderContact, OrderUpdate};
pub use query::{OrderListQuery, OrderSortKey};
pub use status::OrderStatus;
