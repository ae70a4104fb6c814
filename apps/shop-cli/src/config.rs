//! Driver configuration.
//!
//! Loaded from environment variables with fallback to defaults, then
//! overridden by command-line flags.
//!
//! | Variable                       | Flag            | Default                         |
//! |--------------------------------|-----------------|---------------------------------|
//! | `SHOP_DATABASE_URL`            | `--db <DSN>`    | unset (database not touched)    |
//! | `SHOP_DB_CONNECT_TIMEOUT_SECS` |                 | `5`                             |
//! | `SHOP_LOG`                     |                 | `warn,shop_cli=info,...`        |
//! |                                | `--payment <M>` | `card`                          |
//! |                                | `--payment-id`  | `1234567890123456`              |
//! |                                | `--amount <X>`  | `50000.00`                      |
//! |                                | `--json`        | off                             |
//!
//! `RUST_LOG`, when set, wins over `SHOP_LOG`.

use serde::{Deserialize, Serialize};
use shop_core::{Money, PaymentMethod};
use std::env;
use std::time::Duration;

pub const DEFAULT_LOG_FILTER: &str = "warn,shop_cli=info,shop_db=info,sqlx=warn";
pub const DEFAULT_CARD_NUMBER: &str = "1234567890123456";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(ShopConfig),
    Help,
}

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// DSN for the optional database check.
    pub database_url: Option<String>,

    /// How long to wait for the database connection.
    pub db_connect_timeout: Duration,

    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Print the final order as JSON.
    pub json: bool,

    /// How the demo order is paid.
    pub payment_method: PaymentMethod,

    /// Card number, wallet id or phone number for the payment.
    pub payment_id: String,

    /// Unit price of the single item, and the declared order total.
    pub amount: Money,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            database_url: None,
            db_connect_timeout: Duration::from_secs(5),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
            payment_method: PaymentMethod::Card,
            payment_id: DEFAULT_CARD_NUMBER.to_string(),
            amount: Money::from_major_minor(50000, 0),
        }
    }
}

impl ShopConfig {
    /// Load configuration from the process environment and arguments.
    pub fn load() -> Result<Command, ConfigError> {
        Self::from_sources(|key| env::var(key).ok(), env::args().skip(1))
    }

    /// Builds the configuration from an environment lookup and the
    /// arguments (without the program name).
    pub fn from_sources<I>(lookup: impl Fn(&str) -> Option<String>, args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = ShopConfig {
            database_url: lookup("SHOP_DATABASE_URL").filter(|dsn| !dsn.trim().is_empty()),
            ..ShopConfig::default()
        };

        if let Some(secs) = lookup("SHOP_DB_CONNECT_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "SHOP_DB_CONNECT_TIMEOUT_SECS".to_string(),
                    reason: format!("'{}' is not a number of seconds", secs),
                })?;
            config.db_connect_timeout = Duration::from_secs(secs);
        }

        if let Some(filter) = lookup("SHOP_LOG") {
            config.log_filter = filter;
        }

        let mut payment_id_given = false;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--json" => config.json = true,
                "--db" | "-d" => {
                    config.database_url = Some(value_for(&arg, args.next())?);
                }
                "--payment" | "-p" => {
                    let value = value_for(&arg, args.next())?;
                    config.payment_method = value.parse().map_err(|e: shop_core::CoreError| {
                        ConfigError::InvalidValue {
                            key: arg.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                }
                "--payment-id" => {
                    config.payment_id = value_for(&arg, args.next())?;
                    payment_id_given = true;
                }
                "--amount" | "-a" => {
                    let value = value_for(&arg, args.next())?;
                    config.amount = value.parse().map_err(|e: shop_core::ValidationError| {
                        ConfigError::InvalidValue {
                            key: arg.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        // A card number makes no sense as a wallet id or phone.
        if !payment_id_given && config.payment_method != PaymentMethod::Card {
            return Err(ConfigError::MissingRequired(format!(
                "--payment-id for {} payments",
                config.payment_method
            )));
        }

        Ok(Command::Run(config))
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

/// Usage text for `--help`.
pub fn usage() -> &'static str {
    "Internet Shop Management System\n\
     \n\
     Usage: shop [OPTIONS]\n\
     \n\
     Options:\n\
     \x20 -d, --db <DSN>          Also check a database (e.g. sqlite://shop.db?mode=rwc)\n\
     \x20 -p, --payment <METHOD>  card, e-wallet or sbp (default: card)\n\
     \x20     --payment-id <ID>   Card number, wallet id or phone number\n\
     \x20 -a, --amount <AMOUNT>   Order amount in rubles (default: 50000.00)\n\
     \x20     --json              Print the final order as JSON\n\
     \x20 -h, --help              Show this help message\n\
     \n\
     Environment:\n\
     \x20 SHOP_DATABASE_URL, SHOP_DB_CONNECT_TIMEOUT_SECS, SHOP_LOG, RUST_LOG\n"
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}
