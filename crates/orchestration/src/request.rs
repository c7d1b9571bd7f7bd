//! The purchase request accepted by the orchestrator.

use common::CustomerId;
use domain::{Money, PaymentMethod, PurchaseLine};
use serde::{Deserialize, Serialize};

/// One purchase request: who is buying what, how it is paid.
///
/// Lines are not deduplicated here; a batch with repeated item ids is
/// passed through and validated cumulatively by the inventory ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Caller-supplied idempotency/display token.
    pub reference: String,

    /// Total amount to charge.
    pub total_amount: Money,

    /// Payment method selected by the customer.
    pub payment_method: PaymentMethod,

    /// The purchasing customer.
    pub customer_id: CustomerId,

    /// Requested lines, one per item.
    pub lines: Vec<PurchaseLine>,
}

impl CreateOrderRequest {
    /// Creates a new purchase request.
    pub fn new(
        reference: impl Into<String>,
        total_amount: Money,
        payment_method: PaymentMethod,
        customer_id: impl Into<CustomerId>,
        lines: Vec<PurchaseLine>,
    ) -> Self {
        Self {
            reference: reference.into(),
            total_amount,
            payment_method,
            customer_id: customer_id.into(),
            lines,
        }
    }
}
