// src/lib.rs
//! Client-side console for the recruitment backend: typed resource
//! clients, paginated list controllers, form and detail modals, toasts and
//! the role gate.

// ============================================================================
// MODULE IMPORTS
// ============================================================================

pub mod auth;
pub mod common;
pub mod forms;
pub mod http;
pub mod listing;
pub mod notifications;
pub mod resources;
pub mod screen;
pub mod services;

// ============================================================================
// COMMON RE-EXPORTS
// ============================================================================

pub use common::{ClientConfig, ClientError, ClientResult, RecordId};
pub use http::{ApiClient, History, Session, UnauthorizedRedirect};
pub use listing::{FilterState, ListController, ListStatus, PaginationState};
pub use notifications::{Notifier, ToastCenter};
pub use resources::{Resource, ResourceClient};
pub use screen::ResourceScreen;
