//! # shop-db: Database Connection Wrapper
//!
//! A generic SQL client for the internet shop: one owned connection opened
//! from a DSN, raw statements, and a `BEGIN` / `COMMIT` / `ROLLBACK`
//! bracket. Backed by sqlx's SQLite driver.
//!
//! The object model in `shop-core` does not depend on this crate. The shop
//! driver only opens a connection when a DSN is configured.
//!
//! ## Module Organization
//!
//! - [`connection`] - `DatabaseConnection`, `DbConfig`, `QueryResult`
//! - [`error`] - Database error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shop_db::{DatabaseConnection, DbConfig};
//!
//! let mut conn = DatabaseConnection::connect(DbConfig::new("sqlite://shop.db?mode=rwc")).await;
//! if !conn.is_connected() {
//!     return; // already logged
//! }
//! let rows = conn.execute_query("SELECT 1").await?;
//! ```

pub mod connection;
pub mod error;

pub use connection::{DatabaseConnection, DbConfig, QueryResult};
pub use error::{DbError, DbResult};
