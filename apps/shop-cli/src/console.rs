//! Console output for status lines.

use shop_core::Notifier;
use std::io::{self, Write};
use tracing::debug;

/// Writes every notification to stdout, one line each.
///
/// Logs go to stderr (see `init_tracing`), so stdout carries only the
/// shop's status lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        debug!(message, "notification");
        // A closed stdout (e.g. `shop | head -1`) must not abort the demo.
        let _ = writeln!(io::stdout().lock(), "{}", message);
    }
}
