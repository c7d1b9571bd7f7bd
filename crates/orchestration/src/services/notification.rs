//! Notification publisher trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::OrderConfirmation;

use crate::error::{OrchestrationError, Result};

/// Publishes order confirmations to downstream consumers.
///
/// The orchestrator treats publishing as best-effort: a failure here is
/// logged and retried out-of-band, never surfaced to the caller of
/// `create_order`.
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    /// Publishes one confirmation event.
    async fn publish(&self, event: OrderConfirmation) -> Result<()>;
}

#[derive(Debug, Default)]
struct PublisherState {
    published: Vec<OrderConfirmation>,
    fail_on_publish: bool,
}

/// In-memory notification publisher for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationPublisher {
    state: Arc<RwLock<PublisherState>>,
}

impl InMemoryNotificationPublisher {
    /// Creates a new in-memory publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the publisher to fail every publish call.
    pub fn set_fail_on_publish(&self, fail: bool) {
        self.state.write().unwrap().fail_on_publish = fail;
    }

    /// Returns the number of published confirmations.
    pub fn published_count(&self) -> usize {
        self.state.read().unwrap().published.len()
    }

    /// Returns the published confirmations in publish order.
    pub fn published(&self) -> Vec<OrderConfirmation> {
        self.state.read().unwrap().published.clone()
    }
}

#[async_trait]
impl NotificationPublisher for InMemoryNotificationPublisher {
    async fn publish(&self, event: OrderConfirmation) -> Result<()> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_publish {
            return Err(OrchestrationError::Notification(
                "notification channel unavailable".to_string(),
            ));
        }

        state.published.push(event);
        Ok(())
    }
}
