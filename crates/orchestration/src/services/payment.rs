//! Payment gateway trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::{PaymentReceipt, PaymentRequest};
use uuid::Uuid;

use crate::error::{OrchestrationError, Result};

/// Payment processing for persisted orders.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Requests payment for an order.
    async fn request_payment(&self, request: PaymentRequest) -> Result<PaymentReceipt>;
}

#[derive(Debug, Default)]
struct GatewayState {
    payments: HashMap<String, PaymentRequest>,
    fail_on_charge: bool,
}

/// In-memory payment gateway for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentGateway {
    state: Arc<RwLock<GatewayState>>,
}

impl InMemoryPaymentGateway {
    /// Creates a new in-memory gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the gateway to decline the next payment.
    pub fn set_fail_on_charge(&self, fail: bool) {
        self.state.write().unwrap().fail_on_charge = fail;
    }

    /// Returns the number of accepted payments.
    pub fn payment_count(&self) -> usize {
        self.state.read().unwrap().payments.len()
    }

    /// Returns the accepted payment requests in no particular order.
    pub fn payments(&self) -> Vec<PaymentRequest> {
        self.state.read().unwrap().payments.values().cloned().collect()
    }
}

#[async_trait]
impl PaymentGateway for InMemoryPaymentGateway {
    async fn request_payment(&self, request: PaymentRequest) -> Result<PaymentReceipt> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_charge {
            return Err(OrchestrationError::PaymentFailure(
                "payment declined".to_string(),
            ));
        }

        let payment_id = format!("PAY-{}", Uuid::new_v4());
        state.payments.insert(payment_id.clone(), request);

        Ok(PaymentReceipt { payment_id })
    }
}
