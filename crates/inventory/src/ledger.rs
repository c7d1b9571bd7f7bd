//! The inventory ledger and its batch reservation algorithm.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use common::ItemId;
use domain::{PurchaseLine, ReservedLine};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::error::{InventoryError, Result};
use crate::item::{InventoryItem, NewInventoryItem};

/// Holds per-item available stock and applies batch reservations.
///
/// Each catalog record sits behind its own async mutex; the outer map is
/// only locked to resolve ids or change the catalog's shape. Reservations
/// take the per-item locks in ascending `ItemId` order, so two concurrent
/// batches over overlapping item sets always contend in the same order
/// and can never wait on each other in a cycle.
pub struct InventoryLedger {
    catalog: RwLock<BTreeMap<ItemId, Arc<Mutex<InventoryItem>>>>,
    next_id: AtomicI64,
}

impl InventoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Adds a catalog item and assigns its identity.
    pub async fn add_item(&self, new: NewInventoryItem) -> InventoryItem {
        let id = ItemId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let item = InventoryItem {
            id,
            name: new.name,
            description: new.description,
            unit_price: new.unit_price,
            available_quantity: new.available_quantity,
        };
        self.catalog
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(item.clone())));
        item
    }

    /// Returns a snapshot of a catalog item, or None if it doesn't exist.
    pub async fn get(&self, id: ItemId) -> Option<InventoryItem> {
        let slot = self.catalog.read().await.get(&id).cloned()?;
        let item = slot.lock().await;
        Some(item.clone())
    }

    /// Returns snapshots of all catalog items in ascending id order.
    pub async fn list(&self) -> Vec<InventoryItem> {
        let slots: Vec<Arc<Mutex<InventoryItem>>> =
            self.catalog.read().await.values().cloned().collect();

        let mut items = Vec::with_capacity(slots.len());
        for slot in slots {
            items.push(slot.lock().await.clone());
        }
        items
    }

    /// Returns the available stock for an item, or None if it doesn't exist.
    pub async fn available(&self, id: ItemId) -> Option<u32> {
        self.get(id).await.map(|item| item.available_quantity)
    }

    /// Atomically reserves stock for a whole batch of purchase lines.
    ///
    /// Either every line is validated and every decrement applied, or the
    /// catalog is left untouched. On success, returns one [`ReservedLine`]
    /// per input line, in the caller's request order.
    #[tracing::instrument(skip(self, lines), fields(batch_size = lines.len()))]
    pub async fn reserve(&self, lines: &[PurchaseLine]) -> Result<Vec<ReservedLine>> {
        if lines.is_empty() {
            return Err(InventoryError::EmptyBatch);
        }
        for line in lines {
            if line.quantity == 0 {
                return Err(InventoryError::InvalidQuantity(line.item_id));
            }
        }

        // Resolve every distinct id before touching any stock; a miss
        // fails the whole batch with no mutation.
        let mut slots: BTreeMap<ItemId, Arc<Mutex<InventoryItem>>> = BTreeMap::new();
        {
            let catalog = self.catalog.read().await;
            for line in lines {
                if slots.contains_key(&line.item_id) {
                    continue;
                }
                let slot = catalog
                    .get(&line.item_id)
                    .cloned()
                    .ok_or(InventoryError::ItemNotFound(line.item_id))?;
                slots.insert(line.item_id, slot);
            }
        }

        // Lock acquisition in ascending item order; the BTreeMap iteration
        // order is the required total order.
        let mut guards: BTreeMap<ItemId, OwnedMutexGuard<InventoryItem>> = BTreeMap::new();
        for (id, slot) in &slots {
            guards.insert(*id, slot.clone().lock_owned().await);
        }

        // Pass 1: validate all lines against current stock. Demand is
        // accumulated per item so duplicated ids within one batch are
        // checked cumulatively.
        let mut demand: BTreeMap<ItemId, u32> = BTreeMap::new();
        for line in lines {
            let wanted = demand
                .get(&line.item_id)
                .copied()
                .unwrap_or(0)
                .checked_add(line.quantity)
                .ok_or(InventoryError::InvalidQuantity(line.item_id))?;
            demand.insert(line.item_id, wanted);

            let Some(guard) = guards.get(&line.item_id) else {
                return Err(InventoryError::ItemNotFound(line.item_id));
            };
            if guard.available_quantity < wanted {
                metrics::counter!("reservations_failed_total").increment(1);
                tracing::debug!(item_id = %line.item_id, "insufficient stock, batch rejected");
                return Err(InventoryError::InsufficientStock(line.item_id));
            }
        }

        // Pass 2: every line passed; apply all decrements and snapshot one
        // reserved line per input line, in the caller's request order.
        let mut reserved = Vec::with_capacity(lines.len());
        for line in lines {
            let Some(item) = guards.get_mut(&line.item_id) else {
                return Err(InventoryError::ItemNotFound(line.item_id));
            };
            item.available_quantity -= line.quantity;
            reserved.push(ReservedLine {
                item_id: item.id,
                name: item.name.clone(),
                description: item.description.clone(),
                unit_price: item.unit_price,
                quantity: line.quantity,
            });
        }

        metrics::counter!("reservations_total").increment(1);
        Ok(reserved)
    }

    /// Returns previously reserved stock to the catalog.
    ///
    /// The compensating counterpart of [`reserve`](Self::reserve): each
    /// line's quantity is credited back to its item, under the same
    /// sorted acquisition order. Lines whose item no longer exists in the
    /// catalog are skipped.
    #[tracing::instrument(skip(self, lines), fields(batch_size = lines.len()))]
    pub async fn release(&self, lines: &[ReservedLine]) {
        let mut slots: BTreeMap<ItemId, Arc<Mutex<InventoryItem>>> = BTreeMap::new();
        {
            let catalog = self.catalog.read().await;
            for line in lines {
                if let Some(slot) = catalog.get(&line.item_id) {
                    slots.entry(line.item_id).or_insert_with(|| slot.clone());
                }
            }
        }

        let mut guards: BTreeMap<ItemId, OwnedMutexGuard<InventoryItem>> = BTreeMap::new();
        for (id, slot) in &slots {
            guards.insert(*id, slot.clone().lock_owned().await);
        }

        for line in lines {
            if let Some(item) = guards.get_mut(&line.item_id) {
                item.available_quantity = item.available_quantity.saturating_add(line.quantity);
            }
        }

        metrics::counter!("reservations_released_total").increment(1);
    }
}

impl Default for InventoryLedger {
    fn default() -> Self {
        Self::new()
    }
}
