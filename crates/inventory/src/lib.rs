//! Inventory ledger with atomic batch reservation.
//!
//! The ledger owns the catalog of inventory items and is the only place
//! stock quantities are mutated. A reservation validates and decrements
//! stock for a whole batch of purchase lines, or touches nothing:
//! 1. Resolve every requested item (a miss fails the batch)
//! 2. Acquire per-item locks in ascending item-id order
//! 3. Validate every line against current stock
//! 4. Apply all decrements only if every line passed
//!
//! The sorted acquisition order is what keeps concurrent reservations
//! over overlapping item sets deadlock-free.

pub mod error;
pub mod item;
pub mod ledger;

pub use error::{InventoryError, Result};
pub use item::{InventoryItem, NewInventoryItem};
pub use ledger::InventoryLedger;
