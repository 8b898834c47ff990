// src/notifications/mod.rs
//
// Toasts and the mapping from client errors to human messages.

pub mod messages;
pub mod toast;

#[cfg(test)]
mod tests;

pub use messages::{describe, MessageContext};
pub use toast::{notify_failure, Notifier, Toast, ToastCenter, ToastKind};
