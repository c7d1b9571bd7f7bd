//! Customer directory trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::CustomerId;
use domain::Customer;

use crate::error::{OrchestrationError, Result};

/// Read-only lookup of customers by identifier.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Looks up a customer by id.
    ///
    /// `Ok(None)` means the customer does not exist; `Err` means the
    /// directory itself could not answer.
    async fn find_by_id(&self, customer_id: &CustomerId) -> Result<Option<Customer>>;
}

#[derive(Debug, Default)]
struct DirectoryState {
    customers: HashMap<CustomerId, Customer>,
    fail_on_lookup: bool,
}

/// In-memory customer directory for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

impl InMemoryCustomerDirectory {
    /// Creates a new empty in-memory directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a customer record.
    pub fn insert(&self, customer: Customer) {
        self.state
            .write()
            .unwrap()
            .customers
            .insert(customer.id.clone(), customer);
    }

    /// Configures the directory to fail on the next lookup.
    pub fn set_fail_on_lookup(&self, fail: bool) {
        self.state.write().unwrap().fail_on_lookup = fail;
    }

    /// Returns the number of stored customers.
    pub fn customer_count(&self) -> usize {
        self.state.read().unwrap().customers.len()
    }
}

#[async_trait]
impl CustomerDirectory for InMemoryCustomerDirectory {
    async fn find_by_id(&self, customer_id: &CustomerId) -> Result<Option<Customer>> {
        let state = self.state.read().unwrap();

        if state.fail_on_lookup {
            return Err(OrchestrationError::Directory(
                "directory unavailable".to_string(),
            ));
        }

        Ok(state.customers.get(customer_id).cloned())
    }
}
