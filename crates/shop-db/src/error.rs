//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  connect() failure ──► logged, wrapper stays disconnected              │
//! │                        (is_connected() == false)                        │
//! │                                                                         │
//! │  execute_query() ──► sqlx::Error ──► DbError (this module)             │
//! │                  └─► no handle   ──► DbError::NotConnected             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// No connection is held (connect failed or the wrapper was closed).
    #[error("Not connected to a database")]
    NotConnected,

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Malformed DSN
    /// - Database file doesn't exist and `mode=rwc` was not requested
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The connection attempt did not finish in time.
    #[error("Connection timed out after {0:?}")]
    ConnectTimeout(Duration),

    /// Unique constraint violation.
    #[error("Duplicate value violates {constraint}")]
    UniqueViolation { constraint: String },

    /// Query execution failed (syntax error, missing table, ...).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ```text
/// sqlx::Error::Database (UNIQUE ...)  → DbError::UniqueViolation
/// sqlx::Error::Database (other)       → DbError::QueryFailed
/// sqlx::Error::Io / Tls / Configuration → DbError::ConnectionFailed
/// Other                               → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite: "UNIQUE constraint failed: <table>.<column>"
                if let Some(constraint) = msg.strip_prefix("UNIQUE constraint failed: ") {
                    DbError::UniqueViolation {
                        constraint: constraint.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::Configuration(_) => {
                DbError::ConnectionFailed(err.to_string())
            }

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DbError::NotConnected.to_string(), "Not connected to a database");
        assert_eq!(
            DbError::QueryFailed("no such table: orders".to_string()).to_string(),
            "Query failed: no such table: orders"
        );
        assert_eq!(
            DbError::ConnectTimeout(Duration::from_secs(5)).to_string(),
            "Connection timed out after 5s"
        );
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Internal(_)));
    }
}
