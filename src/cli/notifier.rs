// src/cli/notifier.rs

use std::time::Duration;

use recruit_console::notifications::{Notifier, Toast, ToastCenter};

/// Prints toasts to stderr as they arrive and keeps them in a
/// [`ToastCenter`] so the last error can be inspected afterwards.
pub struct TerminalNotifier {
    toasts: ToastCenter,
}

impl TerminalNotifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: ToastCenter::new(ttl),
        }
    }

    pub fn latest(&self) -> Option<Toast> {
        self.toasts.latest()
    }
}

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        eprintln!("✓ {}", message);
        self.toasts.success(message);
    }

    fn error(&self, message: &str) {
        eprintln!("✗ {}", message);
        self.toasts.error(message);
    }
}
