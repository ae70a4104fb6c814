//! # Users
//!
//! Shop users and what each role may do.
//!
//! ## Capability Matrix
//! ```text
//! ┌──────────────┬──────────────┬─────────────────┬──────────────┬─────────────────────────┐
//! │ Role         │ view_orders  │ manage_products │ manage_users │ own operations          │
//! ├──────────────┼──────────────┼─────────────────┼──────────────┼─────────────────────────┤
//! │ Admin        │ all orders   │ ✓               │ ✓            │                         │
//! │ Manager      │ orders       │ ✓ (quantities)  │ no-op        │                         │
//! │ Customer     │ own orders   │ no-op           │ no-op        │ create / return order   │
//! └──────────────┴──────────────┴─────────────────┴──────────────┴─────────────────────────┘
//! ```
//!
//! Every operation only reports what it would do; no order data is read or
//! changed. The no-op defaults are safe to call on any user.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::notify::Notifier;

// =============================================================================
// Role
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Customer,
}

impl Role {
    /// Lowercase role name: "admin", "manager" or "customer".
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Customer => "customer",
        }
    }

    /// Capitalised name for display ("Admin").
    pub const fn title(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Customer => "Customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Role {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// =============================================================================
// Profile
// =============================================================================

/// Account data shared by every role.
///
/// The password is kept exactly as given and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct UserProfile {
    id: i64,
    name: String,
    email: String,
    password: String,
    role: Role,
}

impl UserProfile {
    fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        UserProfile {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The stored password, as given at construction.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProfile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

// =============================================================================
// User Capability
// =============================================================================

/// Operations every user supports.
///
/// `manage_products` and `manage_users` do nothing unless the role
/// overrides them.
pub trait User {
    fn profile(&self) -> &UserProfile;

    /// Reports that the user is looking at orders.
    fn view_orders(&self, notifier: &dyn Notifier);

    fn manage_products(&self, _notifier: &dyn Notifier) {}

    fn manage_users(&self, _notifier: &dyn Notifier) {}

    fn id(&self) -> i64 {
        self.profile().id()
    }

    fn name(&self) -> &str {
        self.profile().name()
    }

    fn email(&self) -> &str {
        self.profile().email()
    }

    fn role(&self) -> Role {
        self.profile().role()
    }
}

fn report(profile: &UserProfile, action: &'static str, message: String, notifier: &dyn Notifier) {
    debug!(user_id = profile.id(), role = %profile.role(), action, "User action");
    notifier.notify(&message);
}

// =============================================================================
// Admin
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    profile: UserProfile,
}

impl Admin {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Admin {
            profile: UserProfile::new(id, name, email, password, Role::Admin),
        }
    }
}

impl User for Admin {
    fn profile(&self) -> &UserProfile {
        &self.profile
    }

    fn view_orders(&self, notifier: &dyn Notifier) {
        let message = format!("Admin {} viewing all orders...", self.profile.name());
        report(&self.profile, "view_orders", message, notifier);
    }

    fn manage_products(&self, notifier: &dyn Notifier) {
        report(
            &self.profile,
            "manage_products",
            "Admin managing products...".to_string(),
            notifier,
        );
    }

    fn manage_users(&self, notifier: &dyn Notifier) {
        report(
            &self.profile,
            "manage_users",
            "Admin managing users...".to_string(),
            notifier,
        );
    }
}

// =============================================================================
// Manager
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    profile: UserProfile,
}

impl Manager {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Manager {
            profile: UserProfile::new(id, name, email, password, Role::Manager),
        }
    }
}

impl User for Manager {
    fn profile(&self) -> &UserProfile {
        &self.profile
    }

    fn view_orders(&self, notifier: &dyn Notifier) {
        let message = format!("Manager {} viewing orders...", self.profile.name());
        report(&self.profile, "view_orders", message, notifier);
    }

    fn manage_products(&self, notifier: &dyn Notifier) {
        report(
            &self.profile,
            "manage_products",
            "Manager updating product quantities...".to_string(),
            notifier,
        );
    }
}

// =============================================================================
// Customer
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    profile: UserProfile,
}

impl Customer {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Customer {
            profile: UserProfile::new(id, name, email, password, Role::Customer),
        }
    }

    /// Reports that the customer is placing an order. No order is built.
    pub fn create_order(&self, notifier: &dyn Notifier) {
        let message = format!("Customer {} creating order...", self.profile.name());
        report(&self.profile, "create_order", message, notifier);
    }

    /// Reports that the customer is returning an order. No order is touched.
    pub fn return_order(&self, notifier: &dyn Notifier) {
        let message = format!("Customer {} returning order...", self.profile.name());
        report(&self.profile, "return_order", message, notifier);
    }
}

impl User for Customer {
    fn profile(&self) -> &UserProfile {
        &self.profile
    }

    fn view_orders(&self, notifier: &dyn Notifier) {
        let message = format!("Customer {} viewing own orders...", self.profile.name());
        report(&self.profile, "view_orders", message, notifier);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
