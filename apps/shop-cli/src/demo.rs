//! # Demonstration Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Create Admin, Manager, Customer                                     │
//! │  2. Admin:    view orders, manage products, manage users               │
//! │  3. Manager:  view orders, manage products                              │
//! │  4. Customer: view orders, create order                                 │
//! │  5. Order #1 for the customer, one item, pending → completed           │
//! │  6. Pay the order total                                                 │
//! │  7. Customer returns the order                                          │
//! │  (8. Optional: open the configured database and run BEGIN / COMMIT)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The objects never talk to each other; this module wires them together.

use serde::Serialize;
use shop_core::{
    payment_for, status, Admin, Customer, Manager, Notifier, Order, OrderItem, PaymentMethod, User,
};
use shop_db::{DatabaseConnection, DbConfig};
use tracing::{info, warn};

use crate::config::ShopConfig;

/// What the demonstration produced.
#[derive(Debug, Serialize)]
pub struct DemoOutcome {
    pub order: Order,
    pub payment_method: PaymentMethod,
    pub paid: bool,
}

/// Runs steps 1-7, reporting through `notifier`.
pub fn run(config: &ShopConfig, notifier: &dyn Notifier) -> DemoOutcome {
    notifier.notify("=== Internet Shop Management System ===");
    notifier.notify("");

    let admin = Admin::new(1, "Ivan Ivanov", "admin@gmail.com", "art1");
    let manager = Manager::new(2, "Alexander Alexandrov", "manager@gmail.com", "art2");
    let customer = Customer::new(3, "Alexey Sidorov", "customer@example.com", "art3");

    notifier.notify("Users created:");
    for user in [&admin as &dyn User, &manager, &customer] {
        notifier.notify(&format!("- {} ({})", user.name(), user.role().title()));
    }
    notifier.notify("");

    admin.view_orders(notifier);
    admin.manage_products(notifier);
    admin.manage_users(notifier);
    notifier.notify("");

    manager.view_orders(notifier);
    manager.manage_products(notifier);
    notifier.notify("");

    customer.view_orders(notifier);
    customer.create_order(notifier);

    let mut order = Order::new(1, customer.id(), status::PENDING, config.amount);
    order.add_item(OrderItem::new(1, 1, config.amount));
    order.update_status(status::COMPLETED, notifier);
    notifier.notify("");

    let payment = payment_for(config.payment_method, config.payment_id.as_str());
    let paid = payment.pay(order.total_amount(), notifier);
    notifier.notify("");

    customer.return_order(notifier);

    info!(
        order_id = order.id(),
        status = order.status(),
        method = %payment.payment_method(),
        paid,
        "Demo complete"
    );

    DemoOutcome {
        order,
        payment_method: payment.payment_method(),
        paid,
    }
}

/// Opens the configured database, checks it answers and runs an empty
/// transaction bracket. Returns whether everything succeeded.
///
/// Failures are reported and logged, never propagated.
pub async fn check_database(config: DbConfig, notifier: &dyn Notifier) -> bool {
    let mut conn = DatabaseConnection::connect(config).await;
    if !conn.is_connected() {
        notifier.notify("Database unavailable, see log for details.");
        return false;
    }

    let healthy = conn.health_check().await;
    let bracket = match conn.begin_transaction().await {
        Ok(()) => conn.commit().await,
        Err(e) => Err(e),
    };
    if let Err(e) = &bracket {
        warn!(error = %e, "Transaction bracket failed");
    }

    let ok = healthy && bracket.is_ok();
    notifier.notify(if ok {
        "Database connection OK."
    } else {
        "Database connection unhealthy, see log for details."
    });

    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close database connection");
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::{MemoryNotifier, Money};

    fn status_lines(notifier: &MemoryNotifier) -> Vec<String> {
        notifier
            .messages()
            .into_iter()
            .filter(|line| !line.is_empty())
            .collect()
    }

    #[test]
    fn test_default_run() {
        let notifier = MemoryNotifier::new();
        let outcome = run(&ShopConfig::default(), &notifier);

        assert!(outcome.paid);
        assert_eq!(outcome.payment_method, PaymentMethod::Card);
        assert_eq!(outcome.order.status(), "completed");
        assert_eq!(outcome.order.user_id(), 3);
        assert_eq!(outcome.order.items().len(), 1);
        assert_eq!(outcome.order.items()[0].total(), Money::from_major_minor(50000, 0));

        assert_eq!(
            status_lines(&notifier),
            vec![
                "=== Internet Shop Management System ===",
                "Users created:",
                "- Ivan Ivanov (Admin)",
                "- Alexander Alexandrov (Manager)",
                "- Alexey Sidorov (Customer)",
                "Admin Ivan Ivanov viewing all orders...",
                "Admin managing products...",
                "Admin managing users...",
                "Manager Alexander Alexandrov viewing orders...",
                "Manager updating product quantities...",
                "Customer Alexey Sidorov viewing own orders...",
                "Customer Alexey Sidorov creating order...",
                "Order 1 status updated to: completed",
                "Processing card payment of 50000.00 rubles...",
                "Card ending in 3456 charged.",
                "Customer Alexey Sidorov returning order...",
            ]
        );
    }

    #[test]
    fn test_run_with_sbp() {
        let config = ShopConfig {
            payment_method: PaymentMethod::Sbp,
            payment_id: "+79990001122".to_string(),
            amount: Money::from_minor(9990),
            ..ShopConfig::default()
        };
        let notifier = MemoryNotifier::new();
        let outcome = run(&config, &notifier);

        assert!(outcome.paid);
        assert_eq!(outcome.payment_method, PaymentMethod::Sbp);
        let lines = status_lines(&notifier);
        assert!(lines.contains(&"Processing SBP payment of 99.90 rubles...".to_string()));
        assert!(lines.contains(&"Phone +79990001122 charged.".to_string()));
    }

    #[test]
    fn test_outcome_json() {
        let outcome = run(&ShopConfig::default(), &shop_core::SilentNotifier);
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["paid"], true);
        assert_eq!(json["payment_method"], "card");
        assert_eq!(json["order"]["status"], "completed");
    }

    #[tokio::test]
    async fn test_check_database_in_memory() {
        let notifier = MemoryNotifier::new();
        assert!(check_database(DbConfig::in_memory(), &notifier).await);
        assert_eq!(notifier.messages(), vec!["Database connection OK."]);
    }

    #[tokio::test]
    async fn test_check_database_unreachable() {
        let notifier = MemoryNotifier::new();
        let config = DbConfig::new("sqlite:///definitely/not/here/shop.db");

        assert!(!check_database(config, &notifier).await);
        assert_eq!(
            notifier.messages(),
            vec!["Database unavailable, see log for details."]
        );
    }
}
