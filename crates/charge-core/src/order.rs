//! # Order Types
//!
//! Order and line-item types for chargeline. An order owns its line items
//! and moves through a one-way lifecycle: OPEN until settled, PAID after.

use crate::error::{ChargeError, ChargeResult};
use serde::Serialize;
use uuid::Uuid;

/// A line item in an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Display name
    pub name: String,

    /// Unit price in minor currency units (cents)
    pub price: i64,

    /// Quantity
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    /// Builder: set quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Total cost of this line item (price x quantity)
    pub fn total(&self) -> i64 {
        self.price * self.quantity as i64
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order is open, awaiting settlement
    Open,
    /// Order has been settled
    Paid,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Open
    }
}

/// An order to be settled.
///
/// `status` is private: the only transition is OPEN -> PAID via [`Order::pay`],
/// which fails on a second call. Line items remain freely appendable while
/// the order is open.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Unique order ID (generated)
    pub id: String,

    /// Line items, insertion order preserved
    pub line_items: Vec<LineItem>,

    status: OrderStatus,
}

impl Order {
    /// Create a new empty order with a generated ID
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            line_items: Vec::new(),
            status: OrderStatus::Open,
        }
    }

    /// Add a line item
    pub fn add_item(&mut self, item: LineItem) {
        self.line_items.push(item);
    }

    /// Order total: sum of all line-item totals
    pub fn total(&self) -> i64 {
        self.line_items.iter().map(|item| item.total()).sum()
    }

    /// Check if the order has no line items
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Total unit count across all line items
    pub fn item_count(&self) -> u32 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }

    /// Current lifecycle status
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Check if the order has been settled
    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Mark the order as paid. Fails with `AlreadyPaid` if the order has
    /// already been settled; there is no way back to OPEN.
    pub fn pay(&mut self) -> ChargeResult<()> {
        if self.is_paid() {
            return Err(ChargeError::AlreadyPaid);
        }
        self.status = OrderStatus::Paid;
        Ok(())
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_default_quantity() {
        let item = LineItem::new("Test", 1000);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.total(), 1000);
    }

    #[test]
    fn test_line_item_quantity() {
        let item = LineItem::new("Test", 1000).with_quantity(5);
        assert_eq!(item.total(), 5000);
    }

    #[test]
    fn test_empty_order_total() {
        let order = Order::new();
        assert_eq!(order.total(), 0);
        assert!(order.is_empty());
    }

    #[test]
    fn test_order_total() {
        let mut order = Order::new();
        order.add_item(LineItem::new("Coke", 100));
        assert_eq!(order.total(), 100);
    }

    #[test]
    fn test_order_total_with_multiple_items() {
        let mut order = Order::new();
        order.add_item(LineItem::new("Coke", 100));
        order.add_item(LineItem::new("Pepsi", 100));
        assert_eq!(order.total(), 200);
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn test_order_total_is_append_order_invariant() {
        let mut forward = Order::new();
        forward.add_item(LineItem::new("Shoes", 100_00).with_quantity(2));
        forward.add_item(LineItem::new("Hat", 50_00));

        let mut reversed = Order::new();
        reversed.add_item(LineItem::new("Hat", 50_00));
        reversed.add_item(LineItem::new("Shoes", 100_00).with_quantity(2));

        assert_eq!(forward.total(), reversed.total());
        assert_eq!(forward.total(), 250_00);
    }

    #[test]
    fn test_order_pay() {
        let mut order = Order::new();
        assert_eq!(order.status(), OrderStatus::Open);

        order.pay().unwrap();
        assert_eq!(order.status(), OrderStatus::Paid);
        assert!(order.is_paid());
    }

    #[test]
    fn test_order_pay_twice_fails() {
        let mut order = Order::new();
        order.pay().unwrap();
        assert_eq!(order.pay(), Err(ChargeError::AlreadyPaid));
        // Still paid; the failed second call changed nothing
        assert!(order.is_paid());
    }

    #[test]
    fn test_order_ids_are_unique() {
        assert_ne!(Order::new().id, Order::new().id);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Open).unwrap(),
            "\"open\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Paid).unwrap(),
            "\"paid\""
        );
    }
}
