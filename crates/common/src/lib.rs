//! Shared identifier types for the order fulfillment system.
//!
//! Every layer refers to orders, order lines, catalog items, and customers
//! through these wrappers rather than bare integers or strings, so ids of
//! different kinds cannot be mixed up at compile time.

pub mod types;

pub use types::{CustomerId, ItemId, OrderId, OrderLineId};
