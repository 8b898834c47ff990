// src/resources/candidates.rs

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::client::ResourceClient;
use super::documents::file_part;
use super::{Exportable, Record, Resource};
use crate::auth::{ADMIN, HR, RECRUITER};
use crate::common::{ClientResult, RecordId};
use crate::listing::FilterState;

// ============================================================================
// Candidate Models
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub experience_years: Option<f32>,
    #[serde(default)]
    pub skill_ids: Vec<RecordId>,
    #[serde(default)]
    pub qualification_ids: Vec<RecordId>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub experience_years: Option<f32>,
    #[serde(default)]
    pub skill_ids: Vec<RecordId>,
    #[serde(default)]
    pub qualification_ids: Vec<RecordId>,
}

impl Record for Candidate {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct Candidates;

impl Resource for Candidates {
    type Item = Candidate;
    type Draft = CandidateDraft;

    const PATH: &'static str = "/api/candidates";
    const LABEL: &'static str = "candidate";
    const PLURAL: &'static str = "candidates";
    const REQUIRED: &'static [&'static str] = &["firstName", "lastName", "email"];
    const COLUMNS: &'static [&'static str] =
        &["id", "firstName", "lastName", "email", "phone", "experienceYears"];
    const MANAGERS: &'static [&'static str] = &[ADMIN, HR, RECRUITER];

    fn draft_from(item: &Candidate) -> CandidateDraft {
        CandidateDraft {
            first_name: item.first_name.clone(),
            last_name: item.last_name.clone(),
            email: item.email.clone(),
            phone: item.phone.clone(),
            experience_years: item.experience_years,
            skill_ids: item.skill_ids.clone(),
            qualification_ids: item.qualification_ids.clone(),
        }
    }

    fn default_filters() -> FilterState {
        FilterState::new().with("search", "").with("skillId", "")
    }
}

impl Exportable for Candidates {
    const EXPORT_FILE: &'static str = "candidates_export.csv";
}

impl ResourceClient<Candidates> {
    /// POST /api/candidates/{id}/resume (multipart). The backend parses the
    /// resume and returns the candidate with any fields it filled in.
    pub async fn upload_resume(
        &self,
        id: RecordId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<Candidate> {
        let size = bytes.len();
        let part: Part = file_part(file_name, bytes)?;
        let form = Form::new().part("file", part);

        let path = format!("{}/resume", Self::item_path(id));
        let candidate: Candidate = self.api().post_multipart(&path, form).await?;

        info!(
            candidate_id = id,
            file_name = %file_name,
            bytes = size,
            "Resume uploaded"
        );
        Ok(candidate)
    }
}
