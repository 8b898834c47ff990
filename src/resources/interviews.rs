// src/resources/interviews.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{HasStatus, Record, Resource};
use crate::auth::{ADMIN, HR, RECRUITER};
use crate::common::RecordId;
use crate::listing::FilterState;

// ============================================================================
// Interview Models
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: RecordId,
    pub application_id: RecordId,
    #[serde(default)]
    pub candidate_name: Option<String>,
    pub interviewer_id: RecordId,
    #[serde(default)]
    pub interviewer_name: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Online / InPerson / Phone
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterviewDraft {
    pub application_id: Option<RecordId>,
    pub interviewer_id: Option<RecordId>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<u32>,
    pub mode: Option<String>,
    pub feedback: Option<String>,
    pub rating: Option<u8>,
}

impl Record for Interview {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct Interviews;

impl Resource for Interviews {
    type Item = Interview;
    type Draft = InterviewDraft;

    const PATH: &'static str = "/api/interviews";
    const LABEL: &'static str = "interview";
    const PLURAL: &'static str = "interviews";
    const REQUIRED: &'static [&'static str] = &["applicationId", "interviewerId", "scheduledAt"];
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "candidateName",
        "interviewerName",
        "scheduledAt",
        "mode",
        "status",
    ];
    const MANAGERS: &'static [&'static str] = &[ADMIN, HR, RECRUITER];

    fn draft_from(item: &Interview) -> InterviewDraft {
        InterviewDraft {
            application_id: Some(item.application_id),
            interviewer_id: Some(item.interviewer_id),
            scheduled_at: Some(item.scheduled_at),
            duration_minutes: item.duration_minutes,
            mode: item.mode.clone(),
            feedback: item.feedback.clone(),
            rating: item.rating,
        }
    }

    fn default_filters() -> FilterState {
        FilterState::new()
            .with("search", "")
            .with("status", "")
            .with("interviewerId", "")
    }
}

impl HasStatus for Interviews {
    const STATUSES: &'static [&'static str] =
        &["Scheduled", "Completed", "Cancelled", "Rescheduled", "NoShow"];
}
