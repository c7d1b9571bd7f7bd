//! Domain layer for the order fulfillment workflow.
//!
//! This crate provides the data model shared by the inventory ledger and
//! the order orchestrator:
//! - Money and payment method value objects
//! - Purchase lines and their reserved-line snapshots
//! - Order and order line entities with their payment status
//! - The order confirmation event published to the notification channel

pub mod customer;
pub mod events;
pub mod money;
pub mod order;
pub mod payment;
pub mod purchase;

pub use customer::Customer;
pub use events::OrderConfirmation;
pub use money::{Money, PaymentMethod};
pub use order::{NewOrder, Order, OrderLine, OrderStatus};
pub use payment::{PaymentReceipt, PaymentRequest};
pub use purchase::{PurchaseLine, ReservedLine};
