//! Catalog item endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::ItemId;
use domain::Money;
use inventory::NewInventoryItem;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::orders::AppState;

// -- Request types --

#[derive(Deserialize)]
pub struct ItemRequest {
    pub name: String,
    pub description: String,
    pub unit_price_cents: i64,
    pub available_quantity: u32,
}

// -- Response types --

#[derive(Serialize)]
pub struct ItemCreatedResponse {
    pub item_id: i64,
}

#[derive(Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub unit_price_cents: i64,
    pub available_quantity: u32,
}

impl From<inventory::InventoryItem> for ItemResponse {
    fn from(item: inventory::InventoryItem) -> Self {
        Self {
            id: item.id.as_i64(),
            name: item.name,
            description: item.description,
            unit_price_cents: item.unit_price.cents(),
            available_quantity: item.available_quantity,
        }
    }
}

// -- Handlers --

/// POST /items — add a catalog item.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ItemRequest>,
) -> Result<(axum::http::StatusCode, Json<ItemCreatedResponse>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::BadRequest("item name must not be empty".to_string()));
    }

    let item = state
        .ledger
        .add_item(NewInventoryItem::new(
            req.name,
            req.description,
            Money::from_cents(req.unit_price_cents),
            req.available_quantity,
        ))
        .await;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(ItemCreatedResponse {
            item_id: item.id.as_i64(),
        }),
    ))
}

/// GET /items — list all catalog items.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<ItemResponse>> {
    let items = state.ledger.list().await;
    Json(items.into_iter().map(ItemResponse::from).collect())
}

/// GET /items/:id — load a catalog item by id.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state
        .ledger
        .get(ItemId::new(id))
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Item {id} not found")))?;

    Ok(Json(ItemResponse::from(item)))
}
