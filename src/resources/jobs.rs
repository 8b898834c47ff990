// src/resources/jobs.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Deletion, Exportable, HasStatus, Record, Resource};
use crate::auth::{ADMIN, HR, RECRUITER};
use crate::common::RecordId;
use crate::listing::FilterState;

pub const STATUS_CLOSED: &str = "Closed";

// ============================================================================
// Job Models
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub job_type_id: Option<RecordId>,
    #[serde(default)]
    pub job_type_name: Option<String>,
    #[serde(default)]
    pub position_id: Option<RecordId>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub min_salary: Option<f64>,
    #[serde(default)]
    pub max_salary: Option<f64>,
    #[serde(default)]
    pub openings: Option<u32>,
    #[serde(default)]
    pub required_skill_ids: Vec<RecordId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub description: Option<String>,
    pub job_type_id: Option<RecordId>,
    pub position_id: Option<RecordId>,
    pub location: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub openings: Option<u32>,
    #[serde(default)]
    pub required_skill_ids: Vec<RecordId>,
}

impl Record for Job {
    fn id(&self) -> RecordId {
        self.id
    }

    /// Jobs are never removed; deleting one closes it.
    fn is_deleted(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(STATUS_CLOSED))
    }
}

pub struct Jobs;

impl Resource for Jobs {
    type Item = Job;
    type Draft = JobDraft;

    const PATH: &'static str = "/api/jobs";
    const LABEL: &'static str = "job";
    const PLURAL: &'static str = "jobs";
    const REQUIRED: &'static [&'static str] = &["title", "jobTypeId", "location"];
    const COLUMNS: &'static [&'static str] =
        &["id", "title", "jobTypeName", "location", "openings", "status"];
    const MANAGERS: &'static [&'static str] = &[ADMIN, HR, RECRUITER];
    const DELETION: Deletion = Deletion::Soft;

    fn draft_from(item: &Job) -> JobDraft {
        JobDraft {
            title: item.title.clone(),
            description: item.description.clone(),
            job_type_id: item.job_type_id,
            position_id: item.position_id,
            location: item.location.clone(),
            min_salary: item.min_salary,
            max_salary: item.max_salary,
            openings: item.openings,
            required_skill_ids: item.required_skill_ids.clone(),
        }
    }

    fn default_filters() -> FilterState {
        FilterState::new()
            .with("search", "")
            .with("jobTypeId", "")
            .with("status", "")
    }
}

impl HasStatus for Jobs {
    const STATUSES: &'static [&'static str] = &["Draft", "Open", "OnHold", STATUS_CLOSED];
}

impl Exportable for Jobs {
    const EXPORT_FILE: &'static str = "jobs_export.csv";
}
