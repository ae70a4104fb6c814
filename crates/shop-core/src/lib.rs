//! # shop-core: Internet Shop Object Model
//!
//! Users, orders and payments of the internet shop, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Internet Shop Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shop-cli (driver)                            │   │
//! │  │    builds users ──► order ──► payment ──► prints status lines   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   user    │  │   order   │  │  payment  │  │   money   │  │   │
//! │  │   │  Admin    │  │   Order   │  │   Card    │  │   Money   │  │   │
//! │  │   │  Manager  │  │ OrderItem │  │  EWallet  │  │           │  │   │
//! │  │   │  Customer │  │           │  │   SBP     │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   status lines go out through the `Notifier` trait             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  shop-db (SQL connection wrapper) sits beside this crate; the two      │
//! │  never call each other.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`user`] - `User` capability with Admin / Manager / Customer
//! - [`order`] - `Order` and `OrderItem`
//! - [`payment`] - `Payment` capability with Card / E-Wallet / SBP
//! - [`money`] - Integer money (kopecks)
//! - [`notify`] - Where status lines go
//! - [`error`] - Parsing errors for input at the edges
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{CardPayment, MemoryNotifier, Money, Order, OrderItem, Payment};
//!
//! let notifier = MemoryNotifier::new();
//! let price = Money::from_major_minor(50000, 0);
//!
//! let mut order = Order::new(1, 3, "pending", price);
//! order.add_item(OrderItem::new(1, 1, price));
//! order.update_status("completed", &notifier);
//!
//! let card = CardPayment::new("1234567890123456");
//! assert!(card.pay(price, &notifier));
//! assert_eq!(notifier.len(), 3);
//! ```

pub mod error;
pub mod money;
pub mod notify;
pub mod order;
pub mod payment;
pub mod user;

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use notify::{MemoryNotifier, Notifier, SilentNotifier};
pub use order::{status, Order, OrderItem};
pub use payment::{payment_for, CardPayment, EWalletPayment, Payment, PaymentMethod, SbpPayment};
pub use user::{Admin, Customer, Manager, Role, User, UserProfile};

#[cfg(test)]
mod tests {
    use super::*;

    /// The full demonstration flow, checked step by step.
    #[test]
    fn test_shop_scenario() {
        let notifier = MemoryNotifier::new();

        let admin = Admin::new(1, "Ivan Ivanov", "admin@gmail.com", "art1");
        assert_eq!(admin.role().as_str(), "admin");

        let price = Money::from_major_minor(50000, 0);
        let mut order = Order::new(1, 3, status::PENDING, price);
        order.add_item(OrderItem::new(1, 1, price));
        assert_eq!(order.items()[0].total(), price);
        assert_eq!(order.items()[0].total().to_string(), "50000.00");

        order.update_status(status::COMPLETED, &notifier);
        assert_eq!(order.status(), "completed");

        let card = CardPayment::new("1234567890123456");
        assert!(card.pay(price, &notifier));
        assert_eq!(card.payment_method().label(), "Card");

        let customer = Customer::new(3, "Alexey Sidorov", "customer@example.com", "art3");
        customer.return_order(&notifier);

        assert_eq!(
            notifier.messages(),
            vec![
                "Order 1 status updated to: completed",
                "Processing card payment of 50000.00 rubles...",
                "Card ending in 3456 charged.",
                "Customer Alexey Sidorov returning order...",
            ]
        );
    }
}
