//! Order and order line entities.

use chrono::{DateTime, Utc};
use common::{CustomerId, ItemId, OrderId, OrderLineId};
use serde::{Deserialize, Serialize};

use crate::money::{Money, PaymentMethod};

/// Payment status of a persisted order.
///
/// Status transitions:
/// ```text
/// AwaitingPayment ──┬──► Paid
///                   └──► PaymentFailed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order is persisted and inventory reserved; payment not yet settled.
    #[default]
    AwaitingPayment,

    /// Payment accepted by the gateway (terminal state).
    Paid,

    /// Payment rejected or timed out; awaiting out-of-band resolution.
    PaymentFailed,
}

impl OrderStatus {
    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::AwaitingPayment => "AwaitingPayment",
            OrderStatus::Paid => "Paid",
            OrderStatus::PaymentFailed => "PaymentFailed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields of an order before the store assigns its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Caller-supplied idempotency/display token.
    pub reference: String,

    /// Total amount charged for the order.
    pub total_amount: Money,

    /// Payment method selected by the customer.
    pub payment_method: PaymentMethod,

    /// The purchasing customer.
    pub customer_id: CustomerId,
}

impl NewOrder {
    /// Creates the fields for a new order.
    pub fn new(
        reference: impl Into<String>,
        total_amount: Money,
        payment_method: PaymentMethod,
        customer_id: impl Into<CustomerId>,
    ) -> Self {
        Self {
            reference: reference.into(),
            total_amount,
            payment_method,
            customer_id: customer_id.into(),
        }
    }
}

/// A persisted order. Immutable after creation except for its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned identity.
    pub id: OrderId,

    /// Caller-supplied idempotency/display token.
    pub reference: String,

    /// Total amount charged for the order.
    pub total_amount: Money,

    /// Payment method selected by the customer.
    pub payment_method: PaymentMethod,

    /// The purchasing customer.
    pub customer_id: CustomerId,

    /// Payment status.
    pub status: OrderStatus,

    /// Creation timestamp assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// A single line of a persisted order.
///
/// References its owning order by id only; the store owns both records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Store-assigned identity.
    pub id: OrderLineId,

    /// The owning order.
    pub order_id: OrderId,

    /// The purchased catalog item.
    pub item_id: ItemId,

    /// Units purchased.
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_is_awaiting_payment() {
        assert_eq!(OrderStatus::default(), OrderStatus::AwaitingPayment);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(OrderStatus::AwaitingPayment.to_string(), "AwaitingPayment");
        assert_eq!(OrderStatus::Paid.to_string(), "Paid");
        assert_eq!(OrderStatus::PaymentFailed.to_string(), "PaymentFailed");
    }

    #[test]
    fn test_new_order_fields() {
        let order = NewOrder::new(
            "ORDER-001",
            Money::from_cents(10_000),
            PaymentMethod::CreditCard,
            "cust-1",
        );
        assert_eq!(order.reference, "ORDER-001");
        assert_eq!(order.total_amount.cents(), 10_000);
        assert_eq!(order.customer_id, CustomerId::new("cust-1"));
    }

    #[test]
    fn test_order_serialization_roundtrip() {
        let order = Order {
            id: OrderId::new(1),
            reference: "ORDER-001".to_string(),
            total_amount: Money::from_cents(10_000),
            payment_method: PaymentMethod::Paypal,
            customer_id: CustomerId::new("cust-1"),
            status: OrderStatus::Paid,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }
}
