//! End-to-end tests of the order creation workflow.

use std::sync::Arc;
use std::time::Duration;

use common::{CustomerId, ItemId, OrderId};
use domain::{Customer, Money, OrderStatus, PaymentMethod, PurchaseLine};
use inventory::{InventoryLedger, NewInventoryItem};
use orchestration::{
    CreateOrderRequest, InMemoryCustomerDirectory, InMemoryNotificationPublisher,
    InMemoryOrderStore, InMemoryPaymentGateway, OrchestrationError, OrderOrchestrator, OrderStore,
};
use tokio::task::JoinSet;

type Orchestrator = OrderOrchestrator<
    InMemoryCustomerDirectory,
    InMemoryPaymentGateway,
    InMemoryNotificationPublisher,
    InMemoryOrderStore,
>;

struct Fixture {
    orchestrator: Arc<Orchestrator>,
    customers: InMemoryCustomerDirectory,
    ledger: Arc<InventoryLedger>,
    store: InMemoryOrderStore,
    notifier: InMemoryNotificationPublisher,
}

fn fixture() -> Fixture {
    let customers = InMemoryCustomerDirectory::new();
    let ledger = Arc::new(InventoryLedger::new());
    let store = InMemoryOrderStore::new();
    let payment = InMemoryPaymentGateway::new();
    let notifier = InMemoryNotificationPublisher::new();

    let orchestrator = Arc::new(OrderOrchestrator::new(
        customers.clone(),
        ledger.clone(),
        store.clone(),
        payment.clone(),
        notifier.clone(),
    ));

    Fixture {
        orchestrator,
        customers,
        ledger,
        store,
        notifier,
    }
}

fn seed_customer(fx: &Fixture, id: &str) -> CustomerId {
    let customer = Customer::new(id, "Ada", "Lovelace", "ada@example.com");
    let customer_id = customer.id.clone();
    fx.customers.insert(customer);
    customer_id
}

async fn seed_item(fx: &Fixture, stock: u32) -> ItemId {
    fx.ledger
        .add_item(NewInventoryItem::new(
            "Widget",
            "A widget",
            Money::from_cents(5000),
            stock,
        ))
        .await
        .id
}

async fn wait_until(deadline: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + deadline;
    while tokio::time::Instant::now() < deadline {
        if cond() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    cond()
}

#[tokio::test]
async fn successful_purchase_settles_every_collaborator() {
    let fx = fixture();
    let customer_id = seed_customer(&fx, "cust-1");
    let item_id = seed_item(&fx, 10).await;

    let order_id = fx
        .orchestrator
        .create_order(CreateOrderRequest::new(
            "ORDER-001",
            Money::from_cents(10_000),
            PaymentMethod::CreditCard,
            customer_id.clone(),
            vec![PurchaseLine::new(item_id, 2)],
        ))
        .await
        .unwrap();

    assert!(order_id.as_i64() > 0);
    assert_eq!(fx.ledger.available(item_id).await, Some(8));

    let order = fx.store.find_by_id(order_id).await.unwrap().unwrap();
    assert_eq!(order.reference, "ORDER-001");
    assert_eq!(order.total_amount, Money::from_cents(10_000));
    assert_eq!(order.customer_id, customer_id);

    let lines = fx.store.find_lines(order_id).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].order_id, order_id);

    assert!(
        wait_until(Duration::from_secs(2), || fx.notifier.published_count() == 1).await,
        "confirmation was not published"
    );
    let event = &fx.notifier.published()[0];
    assert_eq!(event.order_reference, "ORDER-001");
    assert_eq!(event.payment_method, PaymentMethod::CreditCard);
    assert_eq!(event.products[0].unit_price, Money::from_cents(5000));
}

#[tokio::test]
async fn order_ids_are_sequential_across_requests() {
    let fx = fixture();
    let customer_id = seed_customer(&fx, "cust-1");
    let item_id = seed_item(&fx, 100).await;

    for expected in 1..=3 {
        let order_id = fx
            .orchestrator
            .create_order(CreateOrderRequest::new(
                format!("ORDER-{expected:03}"),
                Money::from_cents(5000),
                PaymentMethod::Paypal,
                customer_id.clone(),
                vec![PurchaseLine::new(item_id, 1)],
            ))
            .await
            .unwrap();
        assert_eq!(order_id, OrderId::new(expected));
    }
}

#[tokio::test]
async fn exhausted_item_rejects_later_purchase_untouched() {
    let fx = fixture();
    let customer_id = seed_customer(&fx, "cust-1");
    let item_id = seed_item(&fx, 3).await;

    fx.orchestrator
        .create_order(CreateOrderRequest::new(
            "ORDER-001",
            Money::from_cents(15_000),
            PaymentMethod::Cash,
            customer_id.clone(),
            vec![PurchaseLine::new(item_id, 3)],
        ))
        .await
        .unwrap();

    let err = fx
        .orchestrator
        .create_order(CreateOrderRequest::new(
            "ORDER-002",
            Money::from_cents(5000),
            PaymentMethod::Cash,
            customer_id,
            vec![PurchaseLine::new(item_id, 1)],
        ))
        .await
        .unwrap_err();

    assert_eq!(err, OrchestrationError::InsufficientStock(item_id));
    assert_eq!(fx.ledger.available(item_id).await, Some(0));
    assert_eq!(fx.store.order_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_purchases_over_overlapping_items_account_exactly() {
    const TASKS: usize = 16;
    const INITIAL: u32 = 20;

    let fx = fixture();
    let customer_id = seed_customer(&fx, "cust-1");
    let first = seed_item(&fx, INITIAL).await;
    let second = seed_item(&fx, INITIAL).await;

    let mut tasks = JoinSet::new();
    for i in 0..TASKS {
        let orchestrator = fx.orchestrator.clone();
        let customer_id = customer_id.clone();
        // Half the tasks request the pair in reverse order.
        let lines = if i % 2 == 0 {
            vec![PurchaseLine::new(first, 2), PurchaseLine::new(second, 1)]
        } else {
            vec![PurchaseLine::new(second, 1), PurchaseLine::new(first, 2)]
        };
        tasks.spawn(async move {
            orchestrator
                .create_order(CreateOrderRequest::new(
                    format!("ORDER-{i:03}"),
                    Money::from_cents(5000),
                    PaymentMethod::CreditCard,
                    customer_id,
                    lines,
                ))
                .await
                .is_ok()
        });
    }

    let mut successes = 0u32;
    while let Some(result) = tasks.join_next().await {
        if result.unwrap() {
            successes += 1;
        }
    }

    // Each successful purchase took 2 of `first` and 1 of `second`.
    let first_left = fx.ledger.available(first).await.unwrap();
    let second_left = fx.ledger.available(second).await.unwrap();
    assert_eq!(first_left, INITIAL - 2 * successes);
    assert_eq!(second_left, INITIAL - successes);
    assert_eq!(fx.store.order_count(), successes as usize);

    // With 20 units of `first` at 2 per order, at most 10 can succeed.
    assert_eq!(successes, 10);
}

#[tokio::test]
async fn payment_failure_leaves_order_awaiting_resolution() {
    let fx = fixture();
    let customer_id = seed_customer(&fx, "cust-1");
    let item_id = seed_item(&fx, 5).await;

    let payment = InMemoryPaymentGateway::new();
    payment.set_fail_on_charge(true);
    let orchestrator: Orchestrator = OrderOrchestrator::new(
        fx.customers.clone(),
        fx.ledger.clone(),
        fx.store.clone(),
        payment,
        fx.notifier.clone(),
    );

    let err = orchestrator
        .create_order(CreateOrderRequest::new(
            "ORDER-001",
            Money::from_cents(5000),
            PaymentMethod::BankTransfer,
            customer_id,
            vec![PurchaseLine::new(item_id, 1)],
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, OrchestrationError::PaymentFailure(_)));
    let order = fx.store.find_by_id(OrderId::new(1)).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::PaymentFailed);
    // Stock stays reserved pending out-of-band resolution.
    assert_eq!(fx.ledger.available(item_id).await, Some(4));
    assert_eq!(fx.notifier.published_count(), 0);
}
