//! Payment gateway wire types.

use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::money::{Money, PaymentMethod};

/// Request sent to the payment gateway for a persisted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: Money,
    pub payment_method: PaymentMethod,
    pub order_id: OrderId,
    pub order_reference: String,
    pub customer: Customer,
}

impl PaymentRequest {
    /// Creates a new payment request.
    pub fn new(
        amount: Money,
        payment_method: PaymentMethod,
        order_id: OrderId,
        order_reference: impl Into<String>,
        customer: Customer,
    ) -> Self {
        Self {
            amount,
            payment_method,
            order_id,
            order_reference: order_reference.into(),
            customer,
        }
    }
}

/// Receipt returned by the payment gateway on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// The payment ID assigned by the gateway.
    pub payment_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_request_roundtrip() {
        let request = PaymentRequest::new(
            Money::from_cents(10_000),
            PaymentMethod::BankTransfer,
            OrderId::new(7),
            "ORDER-007",
            Customer::new("cust-1", "Ada", "Lovelace", "ada@example.com"),
        );
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: PaymentRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }
}
