//! # Payments
//!
//! Three ways to pay, behind one [`Payment`] trait.
//!
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐
//! │  CardPayment    │   │ EWalletPayment  │   │   SbpPayment    │
//! │  card_number    │   │  wallet_id      │   │  phone_number   │
//! │  "Card"         │   │  "E-Wallet"     │   │  "SBP"          │
//! │  shows last 4   │   │  shows full id  │   │  shows phone    │
//! └─────────────────┘   └─────────────────┘   └─────────────────┘
//! ```
//!
//! No gateway is contacted. `pay` reports the charge and succeeds; it keeps
//! no history and checks no balance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

use crate::error::CoreError;
use crate::money::Money;
use crate::notify::Notifier;

// =============================================================================
// Payment Method
// =============================================================================

/// The payment method family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Bank card.
    Card,
    /// Electronic wallet.
    EWallet,
    /// Fast payment system, addressed by phone number.
    Sbp,
}

impl PaymentMethod {
    /// Human-readable label: "Card", "E-Wallet" or "SBP".
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::EWallet => "E-Wallet",
            PaymentMethod::Sbp => "SBP",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl PartialEq<&str> for PaymentMethod {
    fn eq(&self, other: &&str) -> bool {
        self.label() == *other
    }
}

/// Accepts the label or a short name, case-insensitively:
/// `card`, `e-wallet` / `ewallet` / `wallet`, `sbp`.
impl FromStr for PaymentMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "e-wallet" | "ewallet" | "e_wallet" | "wallet" => Ok(PaymentMethod::EWallet),
            "sbp" => Ok(PaymentMethod::Sbp),
            _ => Err(CoreError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

// =============================================================================
// Payment Capability
// =============================================================================

/// Something a customer can pay with.
pub trait Payment {
    /// Charges `amount` and reports it. Always succeeds.
    fn pay(&self, amount: Money, notifier: &dyn Notifier) -> bool;

    /// The method this payment uses.
    fn payment_method(&self) -> PaymentMethod;
}

/// Builds the payment variant for `method`, keyed by `identifier`
/// (card number, wallet id or phone number).
pub fn payment_for(method: PaymentMethod, identifier: impl Into<String>) -> Box<dyn Payment> {
    let identifier = identifier.into();
    match method {
        PaymentMethod::Card => Box::new(CardPayment::new(identifier)),
        PaymentMethod::EWallet => Box::new(EWalletPayment::new(identifier)),
        PaymentMethod::Sbp => Box::new(SbpPayment::new(identifier)),
    }
}

fn announce(method: PaymentMethod, amount: Money, notifier: &dyn Notifier) {
    let kind = match method {
        PaymentMethod::Card => "card",
        PaymentMethod::EWallet => "e-wallet",
        PaymentMethod::Sbp => "SBP",
    };
    info!(method = %method, amount = %amount, "Processing payment");
    notifier.notify(&format!("Processing {} payment of {} rubles...", kind, amount));
}

// =============================================================================
// Card
// =============================================================================

/// Card payment. Only the last four digits are ever shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPayment {
    card_number: String,
}

impl CardPayment {
    pub fn new(card_number: impl Into<String>) -> Self {
        CardPayment {
            card_number: card_number.into(),
        }
    }

    /// Last four characters of the card number, or all of it when shorter.
    pub fn last_four(&self) -> &str {
        let count = self.card_number.chars().count();
        match self.card_number.char_indices().nth(count.saturating_sub(4)) {
            Some((start, _)) => &self.card_number[start..],
            None => &self.card_number,
        }
    }
}

impl Payment for CardPayment {
    fn pay(&self, amount: Money, notifier: &dyn Notifier) -> bool {
        announce(PaymentMethod::Card, amount, notifier);
        notifier.notify(&format!("Card ending in {} charged.", self.last_four()));
        true
    }

    fn payment_method(&self) -> PaymentMethod {
        PaymentMethod::Card
    }
}

// =============================================================================
// E-Wallet
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EWalletPayment {
    wallet_id: String,
}

impl EWalletPayment {
    pub fn new(wallet_id: impl Into<String>) -> Self {
        EWalletPayment {
            wallet_id: wallet_id.into(),
        }
    }

    pub fn wallet_id(&self) -> &str {
        &self.wallet_id
    }
}

impl Payment for EWalletPayment {
    fn pay(&self, amount: Money, notifier: &dyn Notifier) -> bool {
        announce(PaymentMethod::EWallet, amount, notifier);
        notifier.notify(&format!("Wallet {} charged.", self.wallet_id));
        true
    }

    fn payment_method(&self) -> PaymentMethod {
        PaymentMethod::EWallet
    }
}

// =============================================================================
// SBP
// =============================================================================

/// Fast payment system transfer addressed by phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbpPayment {
    phone_number: String,
}

impl SbpPayment {
    pub fn new(phone_number: impl Into<String>) -> Self {
        SbpPayment {
            phone_number: phone_number.into(),
        }
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

impl Payment for SbpPayment {
    fn pay(&self, amount: Money, notifier: &dyn Notifier) -> bool {
        announce(PaymentMethod::Sbp, amount, notifier);
        notifier.notify(&format!("Phone {} charged.", self.phone_number));
        true
    }

    fn payment_method(&self) -> PaymentMethod {
        PaymentMethod::Sbp
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
