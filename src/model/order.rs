//! Orders, order ids and the tracked order status.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Tracked processing state of an order.
///
/// Transitions only move forward: `New -> Processing -> Completed`. The
/// "order not found" sentinel is `None` at the lookup boundary, not a
/// variant - an id the queue has never seen simply has no status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    Processing,
    Completed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            OrderStatus::New => "new",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
        };
        f.write_str(text)
    }
}

/// A customer's accumulated purchase: an append-only item list and its
/// running total.
///
/// The id is assigned by the caller and the customer name is fixed at
/// construction. [`add_item`](Order::add_item) is the only mutation; items
/// can never be removed or edited, so the total never drifts from the sum
/// of the prices passed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    items: Vec<String>,
    total_cost: f64,
}

impl Order {
    /// Creates an empty order for `customer_name` with a zero total.
    pub fn new(id: OrderId, customer_name: impl Into<String>) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            items: Vec::new(),
            total_cost: 0.0,
        }
    }

    /// Appends an item and folds its price into the running total.
    ///
    /// Prices are not validated; a negative price is accepted and lowers
    /// the total.
    pub fn add_item(&mut self, item: impl Into<String>, price: f64) {
        self.items.push(item.into());
        self.total_cost += price;
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Item names in purchase order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_accumulates_total_in_call_order() {
        let mut order = Order::new(OrderId(1), "Alice");
        order.add_item("Widget", 100.0);
        order.add_item("Gadget", 25.5);

        assert_eq!(order.items(), ["Widget", "Gadget"]);
        assert_eq!(order.total_cost(), 125.5);
        assert_eq!(order.customer_name(), "Alice");
    }

    #[test]
    fn test_negative_price_is_accepted_and_lowers_total() {
        let mut order = Order::new(OrderId(2), "Bob");
        order.add_item("Widget", 100.0);
        order.add_item("Discount", -40.0);

        assert_eq!(order.total_cost(), 60.0);
    }

    #[test]
    fn test_status_renders_presentation_text() {
        assert_eq!(OrderStatus::New.to_string(), "new");
        assert_eq!(OrderStatus::Processing.to_string(), "processing");
        assert_eq!(OrderStatus::Completed.to_string(), "completed");
    }
}
