//! The order orchestrator: one purchase request in, one outcome out.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use common::OrderId;
use domain::{NewOrder, Order, OrderConfirmation, OrderLine, OrderStatus, PaymentRequest};
use inventory::InventoryLedger;

use crate::error::{OrchestrationError, Result};
use crate::request::CreateOrderRequest;
use crate::services::customers::CustomerDirectory;
use crate::services::notification::NotificationPublisher;
use crate::services::payment::PaymentGateway;
use crate::services::store::OrderStore;
use crate::steps;

/// How often a confirmation publish is attempted before giving up.
const NOTIFY_ATTEMPTS: u32 = 3;

/// Delay between confirmation publish attempts, scaled by attempt number.
const NOTIFY_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Per-step deadlines for the blocking calls of the workflow.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Deadline for the customer directory lookup.
    pub customer_timeout: Duration,
    /// Deadline for the inventory reservation.
    pub reserve_timeout: Duration,
    /// Deadline for persisting the order and its lines.
    pub persist_timeout: Duration,
    /// Deadline for the payment gateway call.
    pub payment_timeout: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            customer_timeout: Duration::from_secs(2),
            reserve_timeout: Duration::from_secs(5),
            persist_timeout: Duration::from_secs(5),
            payment_timeout: Duration::from_secs(10),
        }
    }
}

/// Drives the five-step order creation workflow.
///
/// Steps run strictly in order, each gated on the previous one: verify
/// customer, reserve inventory, persist order, request payment, publish
/// confirmation. No lock is held across steps; the inventory ledger's
/// internal discipline is the only concurrency control, so any number of
/// `create_order` calls may run in parallel.
pub struct OrderOrchestrator<C, P, N, O>
where
    C: CustomerDirectory,
    P: PaymentGateway,
    N: NotificationPublisher + 'static,
    O: OrderStore,
{
    customers: C,
    ledger: Arc<InventoryLedger>,
    store: O,
    payment: P,
    notifier: Arc<N>,
    config: OrchestratorConfig,
}

impl<C, P, N, O> OrderOrchestrator<C, P, N, O>
where
    C: CustomerDirectory,
    P: PaymentGateway,
    N: NotificationPublisher + 'static,
    O: OrderStore,
{
    /// Creates a new orchestrator with default per-step deadlines.
    pub fn new(customers: C, ledger: Arc<InventoryLedger>, store: O, payment: P, notifier: N) -> Self {
        Self::with_config(
            customers,
            ledger,
            store,
            payment,
            notifier,
            OrchestratorConfig::default(),
        )
    }

    /// Creates a new orchestrator with explicit per-step deadlines.
    pub fn with_config(
        customers: C,
        ledger: Arc<InventoryLedger>,
        store: O,
        payment: P,
        notifier: N,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            customers,
            ledger,
            store,
            payment,
            notifier: Arc::new(notifier),
            config,
        }
    }

    /// Executes the order creation workflow for one purchase request.
    ///
    /// Returns the new order's id on success. On failure before the
    /// reservation commits, no state has been mutated; on persistence
    /// failure the reservation is released; on payment failure the order
    /// and the reservation stand, with the order flagged
    /// [`OrderStatus::PaymentFailed`].
    #[tracing::instrument(
        skip(self, request),
        fields(reference = %request.reference, customer_id = %request.customer_id)
    )]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<OrderId> {
        metrics::counter!("orders_requested_total").increment(1);
        let start = std::time::Instant::now();

        if request.reference.trim().is_empty() {
            return Err(OrchestrationError::InvalidRequest(
                "order reference must not be empty".to_string(),
            ));
        }
        if request.lines.is_empty() {
            return Err(OrchestrationError::InvalidRequest(
                "order must contain at least one line".to_string(),
            ));
        }
        if let Some(line) = request.lines.iter().find(|line| line.quantity == 0) {
            return Err(OrchestrationError::InvalidRequest(format!(
                "line for item {} has zero quantity",
                line.item_id
            )));
        }

        // Step 1: verify the customer.
        tracing::info!(step = steps::STEP_VERIFY_CUSTOMER, "workflow step started");
        let customer = self
            .with_deadline(
                self.config.customer_timeout,
                steps::STEP_VERIFY_CUSTOMER,
                self.customers.find_by_id(&request.customer_id),
            )
            .await??
            .ok_or_else(|| OrchestrationError::CustomerNotFound(request.customer_id.clone()))?;

        // Step 2: reserve inventory. Validate-all-then-commit-all inside
        // the ledger guarantees no mutation on failure.
        tracing::info!(step = steps::STEP_RESERVE_INVENTORY, "workflow step started");
        let reserved = self
            .with_deadline(
                self.config.reserve_timeout,
                steps::STEP_RESERVE_INVENTORY,
                self.ledger.reserve(&request.lines),
            )
            .await??;

        // Step 3: persist the order and its lines as one unit. From here
        // on, a failure must hand the reserved stock back.
        tracing::info!(step = steps::STEP_PERSIST_ORDER, "workflow step started");
        let new_order = NewOrder::new(
            request.reference.clone(),
            request.total_amount,
            request.payment_method,
            request.customer_id.clone(),
        );
        let order = match self
            .with_deadline(
                self.config.persist_timeout,
                steps::STEP_PERSIST_ORDER,
                self.store.create(new_order, &request.lines),
            )
            .await
        {
            Ok(Ok(order)) => order,
            Ok(Err(err)) => {
                self.ledger.release(&reserved).await;
                metrics::counter!("orders_failed_total").increment(1);
                tracing::warn!(error = %err, "order persistence failed, reservation released");
                return Err(match err {
                    err @ OrchestrationError::PersistenceFailure(_) => err,
                    err => OrchestrationError::PersistenceFailure(err.to_string()),
                });
            }
            Err(timeout) => {
                self.ledger.release(&reserved).await;
                metrics::counter!("orders_failed_total").increment(1);
                tracing::warn!("order persistence timed out, reservation released");
                return Err(timeout);
            }
        };

        // Step 4: request payment. The order is already durable; failure
        // here flags it for out-of-band resolution instead of undoing
        // the committed steps.
        tracing::info!(step = steps::STEP_REQUEST_PAYMENT, "workflow step started");
        let payment_request = PaymentRequest::new(
            request.total_amount,
            request.payment_method,
            order.id,
            order.reference.clone(),
            customer.clone(),
        );
        let receipt = match tokio::time::timeout(
            self.config.payment_timeout,
            self.payment.request_payment(payment_request),
        )
        .await
        {
            Ok(Ok(receipt)) => receipt,
            Ok(Err(err)) => return self.fail_payment(order.id, err.to_string()).await,
            Err(_) => {
                return self
                    .fail_payment(order.id, "payment gateway timed out".to_string())
                    .await;
            }
        };
        tracing::debug!(payment_id = %receipt.payment_id, "payment accepted");

        if let Err(err) = self.store.set_status(order.id, OrderStatus::Paid).await {
            // Payment went through; a stale status must not fail the call.
            tracing::error!(order_id = %order.id, error = %err, "failed to mark order paid");
        }

        // Step 5: publish the confirmation. Best-effort on a detached
        // task; the order is committed and paid regardless.
        tracing::info!(
            step = steps::STEP_PUBLISH_CONFIRMATION,
            "workflow step started"
        );
        let confirmation = OrderConfirmation::new(
            order.reference.clone(),
            request.total_amount,
            request.payment_method,
            customer,
            reserved,
        );
        self.dispatch_confirmation(confirmation);

        let duration = start.elapsed().as_secs_f64();
        metrics::histogram!("order_create_duration_seconds").record(duration);
        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id, duration, "order created");

        Ok(order.id)
    }

    /// Loads all orders.
    pub async fn find_all_orders(&self) -> Result<Vec<Order>> {
        self.store.find_all().await
    }

    /// Loads an order by id.
    pub async fn find_order_by_id(&self, order_id: OrderId) -> Result<Option<Order>> {
        self.store.find_by_id(order_id).await
    }

    /// Loads the lines of one order.
    pub async fn find_order_lines(&self, order_id: OrderId) -> Result<Vec<OrderLine>> {
        self.store.find_lines(order_id).await
    }

    /// Flags an order after a payment failure and reports the failure.
    async fn fail_payment(&self, order_id: OrderId, reason: String) -> Result<OrderId> {
        if let Err(err) = self
            .store
            .set_status(order_id, OrderStatus::PaymentFailed)
            .await
        {
            tracing::error!(%order_id, error = %err, "failed to flag order after payment failure");
        }
        metrics::counter!("payments_failed_total").increment(1);
        tracing::warn!(%order_id, reason = %reason, "payment failed");
        Err(OrchestrationError::PaymentFailure(reason))
    }

    /// Publishes a confirmation on a detached task with bounded retries.
    fn dispatch_confirmation(&self, event: OrderConfirmation) {
        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            for attempt in 1..=NOTIFY_ATTEMPTS {
                match notifier.publish(event.clone()).await {
                    Ok(()) => {
                        tracing::debug!(
                            reference = %event.order_reference,
                            "order confirmation published"
                        );
                        return;
                    }
                    Err(err) if attempt < NOTIFY_ATTEMPTS => {
                        tracing::warn!(error = %err, attempt, "confirmation publish failed, retrying");
                        tokio::time::sleep(NOTIFY_RETRY_DELAY * attempt).await;
                    }
                    Err(err) => {
                        metrics::counter!("confirmations_dropped_total").increment(1);
                        tracing::error!(
                            error = %err,
                            reference = %event.order_reference,
                            "confirmation publish failed, giving up"
                        );
                    }
                }
            }
        });
    }

    /// Runs a step future against its deadline.
    async fn with_deadline<F, T>(&self, limit: Duration, step: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = T>,
    {
        tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| OrchestrationError::StepTimeout { step })
    }
}
