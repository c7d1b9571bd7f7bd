//! Order creation and read endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::OrderId;
use domain::{Money, PaymentMethod, PurchaseLine};
use inventory::InventoryLedger;
use orchestration::{
    CreateOrderRequest, InMemoryCustomerDirectory, InMemoryNotificationPublisher,
    InMemoryOrderStore, InMemoryPaymentGateway, OrderOrchestrator,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub orchestrator: OrderOrchestrator<
        InMemoryCustomerDirectory,
        InMemoryPaymentGateway,
        InMemoryNotificationPublisher,
        InMemoryOrderStore,
    >,
    pub ledger: Arc<InventoryLedger>,
    pub customers: InMemoryCustomerDirectory,
}

// -- Request types --

#[derive(Deserialize)]
pub struct OrderRequest {
    pub reference: String,
    pub amount_cents: i64,
    pub payment_method: PaymentMethod,
    pub customer_id: String,
    pub items: Vec<OrderLineRequest>,
}

#[derive(Deserialize)]
pub struct OrderLineRequest {
    pub item_id: i64,
    pub quantity: u32,
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderCreatedResponse {
    pub order_id: i64,
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub reference: String,
    pub amount_cents: i64,
    pub payment_method: String,
    pub customer_id: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct OrderLineResponse {
    pub id: i64,
    pub order_id: i64,
    pub item_id: i64,
    pub quantity: u32,
}

impl From<domain::Order> for OrderResponse {
    fn from(order: domain::Order) -> Self {
        Self {
            id: order.id.as_i64(),
            reference: order.reference,
            amount_cents: order.total_amount.cents(),
            payment_method: order.payment_method.to_string(),
            customer_id: order.customer_id.to_string(),
            status: order.status.to_string(),
            created_at: order.created_at.to_rfc3339(),
        }
    }
}

impl From<domain::OrderLine> for OrderLineResponse {
    fn from(line: domain::OrderLine) -> Self {
        Self {
            id: line.id.as_i64(),
            order_id: line.order_id.as_i64(),
            item_id: line.item_id.as_i64(),
            quantity: line.quantity,
        }
    }
}

// -- Handlers --

/// POST /orders — run the order creation workflow.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OrderRequest>,
) -> Result<(axum::http::StatusCode, Json<OrderCreatedResponse>), ApiError> {
    let lines: Vec<PurchaseLine> = req
        .items
        .iter()
        .map(|item| PurchaseLine::new(item.item_id, item.quantity))
        .collect();

    let request = CreateOrderRequest::new(
        req.reference,
        Money::from_cents(req.amount_cents),
        req.payment_method,
        req.customer_id.as_str(),
        lines,
    );

    let order_id = state.orchestrator.create_order(request).await?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(OrderCreatedResponse {
            order_id: order_id.as_i64(),
        }),
    ))
}

/// GET /orders — list all orders.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let orders = state.orchestrator.find_all_orders().await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

/// GET /orders/:id — load an order by id.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state
        .orchestrator
        .find_order_by_id(OrderId::new(id))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {id} not found")))?;

    Ok(Json(OrderResponse::from(order)))
}

/// GET /orders/:id/lines — list the lines of one order.
#[tracing::instrument(skip(state))]
pub async fn lines(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<OrderLineResponse>>, ApiError> {
    let order_id = OrderId::new(id);
    state
        .orchestrator
        .find_order_by_id(order_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {id} not found")))?;

    let lines = state.orchestrator.find_order_lines(order_id).await?;
    Ok(Json(lines.into_iter().map(OrderLineResponse::from).collect()))
}
