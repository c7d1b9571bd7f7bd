//! Customer snapshot as returned by the customer directory.

use common::CustomerId;
use serde::{Deserialize, Serialize};

/// A customer record looked up from the directory.
///
/// Carried through the workflow as a snapshot: the payment request and
/// the confirmation event embed the customer as seen at verification
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Customer {
    /// Creates a new customer snapshot.
    pub fn new(
        id: impl Into<CustomerId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Returns the customer's full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let customer = Customer::new("cust-1", "Ada", "Lovelace", "ada@example.com");
        assert_eq!(customer.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let customer = Customer::new("cust-1", "Ada", "Lovelace", "ada@example.com");
        let json = serde_json::to_string(&customer).unwrap();
        let deserialized: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(customer, deserialized);
    }
}
