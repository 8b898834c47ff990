// src/resources/mod.rs
//
// Typed descriptions of the backend's REST resources. Each concrete
// resource is a marker type implementing `Resource`; the generic
// `ResourceClient` turns that description into CRUD calls.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::auth::MANAGERS;
use crate::common::RecordId;
use crate::listing::FilterState;

pub mod applications;
pub mod candidates;
pub mod client;
pub mod documents;
pub mod email_templates;
pub mod events;
pub mod interviews;
pub mod jobs;
pub mod lookups;
pub mod offer_letters;
pub mod page;
pub mod positions;
pub mod users;
pub mod verifications;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use applications::{Application, Applications};
pub use candidates::{Candidate, Candidates};
pub use client::ResourceClient;
pub use documents::{Document, Documents};
pub use email_templates::{EmailTemplate, EmailTemplates};
pub use events::{Event, Events};
pub use interviews::{Interview, Interviews};
pub use jobs::{Job, Jobs};
pub use lookups::{JobTypes, NamedRecord, Qualifications, Roles, Skills};
pub use offer_letters::{OfferLetter, OfferLetters};
pub use page::{ListQuery, Page};
pub use positions::{Position, Positions};
pub use users::{User, Users};
pub use verifications::{Verification, Verifications};

/// How a delete call manifests in subsequent list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The record disappears.
    Hard,
    /// The record stays and reports itself deleted.
    Soft,
}

/// A backend record with a server-assigned identifier.
pub trait Record: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    fn id(&self) -> RecordId;

    /// Soft-deleted records answer true here.
    fn is_deleted(&self) -> bool {
        false
    }
}

/// Static description of one backend collection.
pub trait Resource: Send + Sync + 'static {
    type Item: Record;
    type Draft: Serialize + DeserializeOwned + Default + Clone + Debug + Send + Sync + 'static;

    /// Collection route, e.g. `/api/skills`.
    const PATH: &'static str;
    /// Singular human label used in messages.
    const LABEL: &'static str;
    const PLURAL: &'static str;
    /// Wire names of draft fields that must be non-blank before submit.
    const REQUIRED: &'static [&'static str];
    /// Wire names shown as list columns.
    const COLUMNS: &'static [&'static str];
    /// Roles that see create/edit/delete affordances.
    const MANAGERS: &'static [&'static str] = MANAGERS;
    const DELETION: Deletion = Deletion::Hard;

    /// Seeds an edit form from an existing record.
    fn draft_from(item: &Self::Item) -> Self::Draft;

    /// Filter values restored by "Clear".
    fn default_filters() -> FilterState {
        FilterState::new().with("search", "")
    }
}

/// Resources exposing `PUT {path}/{id}/status`.
pub trait HasStatus: Resource {
    const STATUSES: &'static [&'static str];
}

/// Resources exposing a CSV export at `GET {path}/export`.
pub trait Exportable: Resource {
    const EXPORT_FILE: &'static str;
}
