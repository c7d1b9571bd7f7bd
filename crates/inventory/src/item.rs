//! Catalog item records owned by the ledger.

use common::ItemId;
use domain::Money;
use serde::{Deserialize, Serialize};

/// A catalog item with its available stock.
///
/// `available_quantity` is mutated only through the ledger's reserve and
/// release operations and never goes negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Ledger-assigned identity.
    pub id: ItemId,

    /// Human-readable item name.
    pub name: String,

    /// Item description.
    pub description: String,

    /// Price per unit.
    pub unit_price: Money,

    /// Units currently available for reservation.
    pub available_quantity: u32,
}

/// Fields of a catalog item before the ledger assigns its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub name: String,
    pub description: String,
    pub unit_price: Money,
    pub available_quantity: u32,
}

impl NewInventoryItem {
    /// Creates the fields for a new catalog item.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        unit_price: Money,
        available_quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            unit_price,
            available_quantity,
        }
    }
}
