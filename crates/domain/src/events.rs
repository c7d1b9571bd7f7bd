//! The order confirmation event published after a successful workflow.

use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::money::{Money, PaymentMethod};
use crate::purchase::ReservedLine;

/// Event published to the notification channel once an order is paid.
///
/// Downstream consumers correlate by `order_reference`; the customer and
/// product fields are snapshots taken during the workflow, not live
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_reference: String,
    pub total_amount: Money,
    pub payment_method: PaymentMethod,
    pub customer: Customer,
    pub products: Vec<ReservedLine>,
}

impl OrderConfirmation {
    /// Creates a new confirmation event.
    pub fn new(
        order_reference: impl Into<String>,
        total_amount: Money,
        payment_method: PaymentMethod,
        customer: Customer,
        products: Vec<ReservedLine>,
    ) -> Self {
        Self {
            order_reference: order_reference.into(),
            total_amount,
            payment_method,
            customer,
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ItemId;

    #[test]
    fn test_confirmation_wire_shape() {
        let event = OrderConfirmation::new(
            "ORDER-001",
            Money::from_cents(10_000),
            PaymentMethod::CreditCard,
            Customer::new("cust-1", "Ada", "Lovelace", "ada@example.com"),
            vec![ReservedLine {
                item_id: ItemId::new(1),
                name: "Widget".to_string(),
                description: "A widget".to_string(),
                unit_price: Money::from_cents(5000),
                quantity: 2,
            }],
        );

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["order_reference"], "ORDER-001");
        assert_eq!(json["payment_method"], "CREDIT_CARD");
        assert_eq!(json["customer"]["id"], "cust-1");
        assert_eq!(json["products"][0]["item_id"], 1);
        assert_eq!(json["products"][0]["quantity"], 2);
    }
}
