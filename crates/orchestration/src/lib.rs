//! Order creation workflow across independently-owned services.
//!
//! This crate provides the orchestrator that turns one purchase request
//! into a persisted order, reserved inventory, an initiated payment, and
//! a published confirmation event. The workflow runs these steps in a
//! fixed order, each gated on the previous one succeeding:
//! 1. Verify the customer
//! 2. Reserve inventory
//! 3. Persist the order and its lines
//! 4. Request payment
//! 5. Publish the confirmation (best-effort, never fails the call)
//!
//! If persistence fails after inventory was reserved, the reservation is
//! released. A payment failure leaves the order and the reservation in
//! place, marked for out-of-band resolution.

pub mod error;
pub mod orchestrator;
pub mod request;
pub mod services;
pub mod steps;

pub use error::{OrchestrationError, Result};
pub use orchestrator::{OrchestratorConfig, OrderOrchestrator};
pub use request::CreateOrderRequest;
pub use services::{
    CustomerDirectory, InMemoryCustomerDirectory, InMemoryNotificationPublisher,
    InMemoryOrderStore, InMemoryPaymentGateway, NotificationPublisher, OrderStore, PaymentGateway,
};
