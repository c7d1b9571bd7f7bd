//! HTTP adapter over the order fulfillment workflow.
//!
//! Exposes order creation and reads, catalog item management, health and
//! Prometheus metrics endpoints, with structured logging (tracing). All
//! business logic lives in the `orchestration` and `inventory` crates;
//! this crate only maps wire payloads to domain calls and errors to
//! status codes.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use inventory::InventoryLedger;
use metrics_exporter_prometheus::PrometheusHandle;
use orchestration::{
    InMemoryCustomerDirectory, InMemoryNotificationPublisher, InMemoryOrderStore,
    InMemoryPaymentGateway, OrderOrchestrator,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/orders", post(routes::orders::create))
        .route("/orders", get(routes::orders::list))
        .route("/orders/{id}", get(routes::orders::get))
        .route("/orders/{id}/lines", get(routes::orders::lines))
        .route("/items", post(routes::items::create))
        .route("/items", get(routes::items::list))
        .route("/items/{id}", get(routes::items::get))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state with in-memory collaborators.
pub fn create_default_state() -> Arc<AppState> {
    let customers = InMemoryCustomerDirectory::new();
    let ledger = Arc::new(InventoryLedger::new());
    let store = InMemoryOrderStore::new();
    let payment = InMemoryPaymentGateway::new();
    let notifier = InMemoryNotificationPublisher::new();

    let orchestrator = OrderOrchestrator::new(
        customers.clone(),
        ledger.clone(),
        store,
        payment,
        notifier,
    );

    Arc::new(AppState {
        orchestrator,
        ledger,
        customers,
    })
}
