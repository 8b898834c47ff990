// src/resources/lookups.rs
//
// Small named reference collections: skills, qualifications, job types and
// roles. They share one record shape.

use serde::{Deserialize, Serialize};

use super::{Record, Resource};
use crate::auth::ADMIN;
use crate::common::RecordId;

// ============================================================================
// Named record models
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NamedRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NamedDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for NamedRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

fn named_draft(item: &NamedRecord) -> NamedDraft {
    NamedDraft {
        name: item.name.clone(),
        description: item.description.clone(),
    }
}

const NAMED_REQUIRED: &[&str] = &["name"];
const NAMED_COLUMNS: &[&str] = &["id", "name", "description"];

// ============================================================================
// Resources
// ============================================================================

pub struct Skills;

impl Resource for Skills {
    type Item = NamedRecord;
    type Draft = NamedDraft;

    const PATH: &'static str = "/api/skills";
    const LABEL: &'static str = "skill";
    const PLURAL: &'static str = "skills";
    const REQUIRED: &'static [&'static str] = NAMED_REQUIRED;
    const COLUMNS: &'static [&'static str] = NAMED_COLUMNS;

    fn draft_from(item: &NamedRecord) -> NamedDraft {
        named_draft(item)
    }
}

pub struct Qualifications;

impl Resource for Qualifications {
    type Item = NamedRecord;
    type Draft = NamedDraft;

    const PATH: &'static str = "/api/qualifications";
    const LABEL: &'static str = "qualification";
    const PLURAL: &'static str = "qualifications";
    const REQUIRED: &'static [&'static str] = NAMED_REQUIRED;
    const COLUMNS: &'static [&'static str] = NAMED_COLUMNS;

    fn draft_from(item: &NamedRecord) -> NamedDraft {
        named_draft(item)
    }
}

pub struct JobTypes;

impl Resource for JobTypes {
    type Item = NamedRecord;
    type Draft = NamedDraft;

    const PATH: &'static str = "/api/jobtypes";
    const LABEL: &'static str = "job type";
    const PLURAL: &'static str = "job types";
    const REQUIRED: &'static [&'static str] = NAMED_REQUIRED;
    const COLUMNS: &'static [&'static str] = NAMED_COLUMNS;

    fn draft_from(item: &NamedRecord) -> NamedDraft {
        named_draft(item)
    }
}

pub struct Roles;

impl Resource for Roles {
    type Item = NamedRecord;
    type Draft = NamedDraft;

    const PATH: &'static str = "/api/roles";
    const LABEL: &'static str = "role";
    const PLURAL: &'static str = "roles";
    const REQUIRED: &'static [&'static str] = NAMED_REQUIRED;
    const COLUMNS: &'static [&'static str] = NAMED_COLUMNS;
    const MANAGERS: &'static [&'static str] = &[ADMIN];

    fn draft_from(item: &NamedRecord) -> NamedDraft {
        named_draft(item)
    }
}
