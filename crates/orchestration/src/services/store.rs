//! Order store trait and in-memory implementation.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use common::{OrderId, OrderLineId};
use domain::{NewOrder, Order, OrderLine, OrderStatus, PurchaseLine};

use crate::error::{OrchestrationError, Result};

/// Persistence of orders and their lines.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists an order and one line per purchase line as a single
    /// atomic unit: either the order and all its lines exist afterwards,
    /// or nothing does.
    async fn create(&self, order: NewOrder, lines: &[PurchaseLine]) -> Result<Order>;

    /// Updates the payment status of a persisted order.
    async fn set_status(&self, order_id: OrderId, status: OrderStatus) -> Result<()>;

    /// Loads an order by id. `Ok(None)` means the order does not exist.
    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>>;

    /// Loads all orders in creation order.
    async fn find_all(&self) -> Result<Vec<Order>>;

    /// Loads the lines of one order.
    async fn find_lines(&self, order_id: OrderId) -> Result<Vec<OrderLine>>;
}

#[derive(Debug, Default)]
struct StoreState {
    orders: BTreeMap<OrderId, Order>,
    lines: Vec<OrderLine>,
    next_order_id: i64,
    next_line_id: i64,
    fail_on_create: bool,
}

/// In-memory order store for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the store to fail on the next create call.
    pub fn set_fail_on_create(&self, fail: bool) {
        self.state.write().unwrap().fail_on_create = fail;
    }

    /// Returns the number of persisted orders.
    pub fn order_count(&self) -> usize {
        self.state.read().unwrap().orders.len()
    }

    /// Returns the number of persisted order lines.
    pub fn line_count(&self) -> usize {
        self.state.read().unwrap().lines.len()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: NewOrder, lines: &[PurchaseLine]) -> Result<Order> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_create {
            return Err(OrchestrationError::PersistenceFailure(
                "order storage unavailable".to_string(),
            ));
        }

        state.next_order_id += 1;
        let order_id = OrderId::new(state.next_order_id);

        let order = Order {
            id: order_id,
            reference: order.reference,
            total_amount: order.total_amount,
            payment_method: order.payment_method,
            customer_id: order.customer_id,
            status: OrderStatus::AwaitingPayment,
            created_at: Utc::now(),
        };

        // Order and lines land under one lock; a reader never observes
        // the order without its lines.
        state.orders.insert(order_id, order.clone());
        for line in lines {
            state.next_line_id += 1;
            let line_id = OrderLineId::new(state.next_line_id);
            state.lines.push(OrderLine {
                id: line_id,
                order_id,
                item_id: line.item_id,
                quantity: line.quantity,
            });
        }

        Ok(order)
    }

    async fn set_status(&self, order_id: OrderId, status: OrderStatus) -> Result<()> {
        let mut state = self.state.write().unwrap();
        let order = state.orders.get_mut(&order_id).ok_or_else(|| {
            OrchestrationError::PersistenceFailure(format!("order {order_id} not found"))
        })?;
        order.status = status;
        Ok(())
    }

    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>> {
        Ok(self.state.read().unwrap().orders.get(&order_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        Ok(self.state.read().unwrap().orders.values().cloned().collect())
    }

    async fn find_lines(&self, order_id: OrderId) -> Result<Vec<OrderLine>> {
        Ok(self
            .state
            .read()
            .unwrap()
            .lines
            .iter()
            .filter(|line| line.order_id == order_id)
            .copied()
            .collect())
    }
}
