//! Collaborator service traits and in-memory implementations.

pub mod customers;
pub mod notification;
pub mod payment;
pub mod store;

pub use customers::{CustomerDirectory, InMemoryCustomerDirectory};
pub use notification::{InMemoryNotificationPublisher, NotificationPublisher};
pub use payment::{InMemoryPaymentGateway, PaymentGateway};
pub use store::{InMemoryOrderStore, OrderStore};
