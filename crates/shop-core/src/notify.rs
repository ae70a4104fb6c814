//! # Notifications
//!
//! Status lines emitted by users, orders and payments.
//!
//! ```text
//! order.update_status("completed", &notifier)
//!      │
//!      ▼
//! Notifier::notify("Order 1 status updated to: completed")
//!      │
//!      ├── ConsoleNotifier (shop-cli)  → stdout
//!      └── MemoryNotifier  (here)      → Vec<String>, inspected by tests
//! ```
//!
//! shop-core never prints; whoever owns the notifier decides where the line
//! goes.

use std::sync::Mutex;

/// Receives observable notifications.
pub trait Notifier {
    /// Delivers one status line.
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// Notifier that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str) {}
}

/// Notifier that keeps every message in arrival order.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of messages received so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns everything received so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned lock only means another notify panicked mid-push.
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}
