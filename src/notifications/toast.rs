// src/notifications/toast.rs
//! Transient success/error toasts

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::messages::{describe, MessageContext};
use crate::common::ClientError;

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn expires_at(&self, ttl: Duration) -> Instant {
        self.created_at + ttl
    }
}

/// In-memory toast stack. Toasts auto-dismiss once `ttl` has elapsed;
/// expired ones are dropped on the next read.
#[derive(Debug)]
pub struct ToastCenter {
    toasts: Mutex<Vec<Toast>>,
    ttl: Duration,
    next_id: AtomicU64,
}

impl ToastCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Mutex::new(Vec::new()),
            ttl,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn push(&self, kind: ToastKind, message: &str) -> u64 {
        self.push_at(kind, message, Instant::now())
    }

    pub fn push_at(&self, kind: ToastKind, message: &str, now: Instant) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let ttl = self.ttl;
        let mut toasts = self.toasts.lock();
        toasts.retain(|t| t.expires_at(ttl) > now);
        toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
            created_at: now,
        });
        id
    }

    pub fn active(&self) -> Vec<Toast> {
        self.active_at(Instant::now())
    }

    /// Toasts still visible at `now`, oldest first.
    pub fn active_at(&self, now: Instant) -> Vec<Toast> {
        let ttl = self.ttl;
        let mut toasts = self.toasts.lock();
        toasts.retain(|t| t.expires_at(ttl) > now);
        toasts.clone()
    }

    pub fn dismiss(&self, id: u64) -> bool {
        let mut toasts = self.toasts.lock();
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        toasts.len() != before
    }

    pub fn latest(&self) -> Option<Toast> {
        self.active().pop()
    }
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl Notifier for ToastCenter {
    fn success(&self, message: &str) {
        info!(message = %message, "Toast: success");
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        warn!(message = %message, "Toast: error");
        self.push(ToastKind::Error, message);
    }
}

/// Reports a failed operation through `notifier` and returns the message.
///
/// 401s get no toast: the unauthorized interceptor has already ended the
/// session and moved the user to the login screen.
pub fn notify_failure(
    notifier: &dyn Notifier,
    err: &ClientError,
    ctx: &MessageContext<'_>,
) -> String {
    let message = describe(err, ctx);
    if err.is_unauthorized() {
        warn!(action = ctx.action, label = ctx.label, "Unauthorized, toast suppressed");
    } else {
        notifier.error(&message);
    }
    message
}
