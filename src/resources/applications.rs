// src/resources/applications.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::client::ResourceClient;
use super::{HasStatus, Record, Resource};
use crate::auth::{ADMIN, HR, RECRUITER};
use crate::common::{ClientError, ClientResult, RecordId};
use crate::listing::FilterState;

// ============================================================================
// Application Models
// ============================================================================

/// A candidate's application to a job.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: RecordId,
    pub candidate_id: RecordId,
    #[serde(default)]
    pub candidate_name: Option<String>,
    pub job_id: RecordId,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub candidate_id: Option<RecordId>,
    pub job_id: Option<RecordId>,
    pub notes: Option<String>,
}

/// Outcome of automated screening against the job's requirements.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub application_id: RecordId,
    pub score: f64,
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Record for Application {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct Applications;

impl Resource for Applications {
    type Item = Application;
    type Draft = ApplicationDraft;

    const PATH: &'static str = "/api/applications";
    const LABEL: &'static str = "application";
    const PLURAL: &'static str = "applications";
    const REQUIRED: &'static [&'static str] = &["candidateId", "jobId"];
    const COLUMNS: &'static [&'static str] =
        &["id", "candidateName", "jobTitle", "status", "score", "appliedAt"];
    const MANAGERS: &'static [&'static str] = &[ADMIN, HR, RECRUITER];

    fn draft_from(item: &Application) -> ApplicationDraft {
        ApplicationDraft {
            candidate_id: Some(item.candidate_id),
            job_id: Some(item.job_id),
            notes: item.notes.clone(),
        }
    }

    fn default_filters() -> FilterState {
        FilterState::new()
            .with("search", "")
            .with("jobId", "")
            .with("status", "")
    }
}

impl HasStatus for Applications {
    const STATUSES: &'static [&'static str] = &[
        "Applied",
        "Screening",
        "Shortlisted",
        "Interviewing",
        "Offered",
        "Hired",
        "Rejected",
    ];
}

impl ResourceClient<Applications> {
    /// POST /api/applications/{id}/screen
    pub async fn screen(&self, id: RecordId) -> ClientResult<ScreeningResult> {
        let path = format!("{}/screen", Self::item_path(id));
        let result: ScreeningResult = self
            .api()
            .post_action(&path)
            .await?
            .ok_or_else(|| ClientError::Decode("screening returned no result".to_string()))?;

        info!(
            application_id = id,
            score = result.score,
            passed = result.passed,
            "Application screened"
        );
        Ok(result)
    }
}
