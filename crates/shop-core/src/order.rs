//! # Orders
//!
//! An [`Order`] owns an ordered list of [`OrderItem`] line items.
//!
//! ## Order Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order #1 (user 3)                  status: "pending" → "completed"    │
//! │  declared total: 50000.00                                               │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │ OrderItem { product 1, qty 1, unit 50000.00 } → total 50000.00    │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Deliberately Loose
//! - `status` is a free-form string; any transition is accepted.
//! - `total_amount` is whatever the order was created with. It is not kept in
//!   sync with the items; [`Order::items_total`] gives the derived figure.
//! - `user_id` is not checked against any user.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::money::Money;
use crate::notify::Notifier;

/// Status values used by the shop. [`Order`] accepts any string.
pub mod status {
    pub const PENDING: &str = "pending";
    pub const COMPLETED: &str = "completed";
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item: product, quantity and unit price. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    product_id: i64,
    quantity: i64,
    unit_price: Money,
}

impl OrderItem {
    /// Creates a line item. Zero or negative quantities are accepted as-is.
    pub fn new(product_id: i64, quantity: i64, unit_price: Money) -> Self {
        OrderItem {
            product_id,
            quantity,
            unit_price,
        }
    }

    #[inline]
    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Line total: `unit_price × quantity`, clamped at the `Money` bounds.
    #[inline]
    pub fn total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: i64,
    user_id: i64,
    status: String,
    total_amount: Money,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates an order with no items.
    pub fn new(id: i64, user_id: i64, status: impl Into<String>, total_amount: Money) -> Self {
        Order {
            id,
            user_id,
            status: status.into(),
            total_amount,
            items: Vec::new(),
        }
    }

    /// Appends an item after the existing ones.
    ///
    /// The declared total is left untouched.
    pub fn add_item(&mut self, item: OrderItem) {
        debug!(
            order_id = self.id,
            product_id = item.product_id(),
            quantity = item.quantity(),
            "Item added to order"
        );
        self.items.push(item);
    }

    /// Overwrites the status and reports the change.
    ///
    /// There is no transition table: `"completed" → "pending"` is as valid
    /// as `"pending" → "completed"`, and repeating the same status notifies
    /// again.
    pub fn update_status(&mut self, new_status: impl Into<String>, notifier: &dyn Notifier) {
        let new_status = new_status.into();
        debug!(
            order_id = self.id,
            from = %self.status,
            to = %new_status,
            "Order status updated"
        );
        self.status = new_status;
        notifier.notify(&format!(
            "Order {} status updated to: {}",
            self.id, self.status
        ));
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The total the order was created with.
    #[inline]
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of the item totals. May differ from [`Order::total_amount`].
    pub fn items_total(&self) -> Money {
        self.items.iter().map(OrderItem::total).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotifier;

    fn rub(major: i64) -> Money {
        Money::from_major_minor(major, 0)
    }

    #[test]
    fn test_item_total() {
        let item = OrderItem::new(1, 1, rub(50000));
        assert_eq!(item.total(), rub(50000));

        let item = OrderItem::new(7, 3, Money::from_minor(299));
        assert_eq!(item.total().minor_units(), 897);
        assert_eq!(item.product_id(), 7);
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.unit_price().minor_units(), 299);
    }

    #[test]
    fn test_item_total_accepts_zero_and_negative() {
        assert_eq!(OrderItem::new(1, 0, rub(10)).total(), Money::zero());
        assert_eq!(OrderItem::new(1, -2, rub(10)).total(), rub(-20));
        assert_eq!(OrderItem::new(1, 2, rub(-10)).total(), rub(-20));
        assert_eq!(OrderItem::new(1, -2, rub(-10)).total(), rub(20));
    }

    #[test]
    fn test_item_total_huge_inputs() {
        let max = Money::from_minor(i64::MAX);

        assert_eq!(OrderItem::new(1, i64::MAX, Money::from_minor(2)).total(), max);
        assert_eq!(
            OrderItem::new(1, i64::MIN, Money::from_minor(2)).total(),
            Money::from_minor(i64::MIN)
        );

        let mut order = Order::new(1, 3, status::PENDING, Money::zero());
        order.add_item(OrderItem::new(1, 1, Money::from_minor(i64::MAX - 1)));
        order.add_item(OrderItem::new(2, 1, Money::from_minor(i64::MAX - 1)));
        assert_eq!(order.items_total(), max);
        assert_eq!(order.total_amount(), Money::zero());
    }

    #[test]
    fn test_add_item_preserves_order() {
        let mut order = Order::new(1, 3, status::PENDING, rub(100));
        for product_id in 1..=5 {
            order.add_item(OrderItem::new(product_id, product_id, rub(10)));
        }

        assert_eq!(order.items().len(), 5);
        let ids: Vec<i64> = order.items().iter().map(OrderItem::product_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let first = order.items()[0].clone();
        order.add_item(OrderItem::new(6, 1, rub(1)));
        assert_eq!(order.items()[0], first);
        assert_eq!(order.items().len(), 6);
    }

    #[test]
    fn test_declared_total_is_independent() {
        let mut order = Order::new(1, 3, status::PENDING, rub(1));
        order.add_item(OrderItem::new(1, 2, rub(30)));
        order.add_item(OrderItem::new(2, 1, rub(40)));

        assert_eq!(order.total_amount(), rub(1));
        assert_eq!(order.items_total(), rub(100));
    }

    #[test]
    fn test_update_status_notifies_every_time() {
        let notifier = MemoryNotifier::new();
        let mut order = Order::new(1, 3, status::PENDING, rub(50000));

        order.update_status(status::COMPLETED, &notifier);
        order.update_status(status::COMPLETED, &notifier);

        assert_eq!(order.status(), "completed");
        assert_eq!(
            notifier.messages(),
            vec![
                "Order 1 status updated to: completed",
                "Order 1 status updated to: completed",
            ]
        );
    }

    #[test]
    fn test_update_status_allows_any_transition() {
        let notifier = MemoryNotifier::new();
        let mut order = Order::new(9, 3, status::COMPLETED, Money::zero());

        order.update_status(status::PENDING, &notifier);
        assert_eq!(order.status(), "pending");

        order.update_status("", &notifier);
        assert_eq!(order.status(), "");
        assert_eq!(notifier.len(), 2);
    }

    #[test]
    fn test_order_serializes_to_json() {
        let mut order = Order::new(1, 3, status::PENDING, rub(50000));
        order.add_item(OrderItem::new(1, 1, rub(50000)));

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["user_id"], 3);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["total_amount"], 5_000_000);
        assert_eq!(json["items"][0]["unit_price"], 5_000_000);
    }
}
