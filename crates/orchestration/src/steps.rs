//! Step names for the order creation workflow.

/// Step name: verify the customer exists.
pub const STEP_VERIFY_CUSTOMER: &str = "verify_customer";

/// Step name: reserve inventory for the requested lines.
pub const STEP_RESERVE_INVENTORY: &str = "reserve_inventory";

/// Step name: persist the order and its lines.
pub const STEP_PERSIST_ORDER: &str = "persist_order";

/// Step name: request payment for the persisted order.
pub const STEP_REQUEST_PAYMENT: &str = "request_payment";

/// Step name: publish the order confirmation.
pub const STEP_PUBLISH_CONFIRMATION: &str = "publish_confirmation";
