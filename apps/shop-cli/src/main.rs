//! # Internet Shop Console Driver
//!
//! Builds the shop's users, an order and a payment, and prints what each of
//! them does.
//!
//! ## Usage
//! ```bash
//! # Default flow (card payment, no database)
//! cargo run -p shop-cli --bin shop
//!
//! # Pay by SBP and print the order as JSON
//! cargo run -p shop-cli --bin shop -- --payment sbp --payment-id +79990001122 --json
//!
//! # Also check a database connection
//! cargo run -p shop-cli --bin shop -- --db "sqlite://shop.db?mode=rwc"
//! ```

mod config;
mod console;
mod demo;

use shop_db::DbConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Command, ShopConfig};
use crate::console::ConsoleNotifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match ShopConfig::load()? {
        Command::Help => {
            print!("{}", config::usage());
            return Ok(());
        }
        Command::Run(config) => config,
    };

    init_tracing(&config.log_filter);
    info!(
        payment_method = %config.payment_method,
        amount = %config.amount,
        database = config.database_url.is_some(),
        "Starting internet shop"
    );

    let notifier = ConsoleNotifier;
    let outcome = demo::run(&config, &notifier);

    if config.json {
        println!();
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    if let Some(dsn) = &config.database_url {
        println!();
        let db_config = DbConfig::new(dsn.as_str()).connect_timeout(config.db_connect_timeout);
        demo::check_database(db_config, &notifier).await;
    }

    info!("Done");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr. `RUST_LOG` overrides the configured filter.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
