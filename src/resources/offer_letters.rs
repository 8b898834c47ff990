// src/resources/offer_letters.rs

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::client::ResourceClient;
use super::{Record, Resource};
use crate::common::{ClientResult, RecordId};
use crate::forms::ViewAction;
use crate::http::Download;
use crate::listing::FilterState;

// ============================================================================
// Offer Letter Models
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferLetter {
    pub id: RecordId,
    pub candidate_id: RecordId,
    #[serde(default)]
    pub candidate_name: Option<String>,
    pub job_id: RecordId,
    #[serde(default)]
    pub job_title: Option<String>,
    pub salary: f64,
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub template_id: Option<RecordId>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferLetterDraft {
    pub candidate_id: Option<RecordId>,
    pub job_id: Option<RecordId>,
    pub salary: Option<f64>,
    pub joining_date: Option<NaiveDate>,
    pub template_id: Option<RecordId>,
}

impl Record for OfferLetter {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct OfferLetters;

impl Resource for OfferLetters {
    type Item = OfferLetter;
    type Draft = OfferLetterDraft;

    const PATH: &'static str = "/api/offerletters";
    const LABEL: &'static str = "offer letter";
    const PLURAL: &'static str = "offer letters";
    const REQUIRED: &'static [&'static str] = &["candidateId", "jobId", "salary", "joiningDate"];
    const COLUMNS: &'static [&'static str] =
        &["id", "candidateName", "jobTitle", "salary", "joiningDate", "status"];

    fn draft_from(item: &OfferLetter) -> OfferLetterDraft {
        OfferLetterDraft {
            candidate_id: Some(item.candidate_id),
            job_id: Some(item.job_id),
            salary: Some(item.salary),
            joining_date: item.joining_date,
            template_id: item.template_id,
        }
    }

    fn default_filters() -> FilterState {
        FilterState::new().with("search", "").with("status", "")
    }
}

/// Options for rendering an offer letter. Absent fields fall back to the
/// values stored on the letter.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
}

impl GeneratePdfRequest {
    pub fn issued_today() -> Self {
        Self {
            template_id: None,
            issue_date: Some(Utc::now().date_naive()),
        }
    }
}

impl ResourceClient<OfferLetters> {
    /// POST /api/offerletters/{id}/generate-pdf; the body is the PDF.
    pub async fn generate_pdf(
        &self,
        id: RecordId,
        request: &GeneratePdfRequest,
    ) -> ClientResult<Download> {
        let path = format!("{}/generate-pdf", Self::item_path(id));
        let pdf = self.api().post_bytes(&path, request).await?;

        info!(offer_letter_id = id, bytes = pdf.len(), "Offer letter PDF generated");
        Ok(pdf)
    }
}

/// Default file name for a generated letter when the server sends none.
pub fn pdf_file_name(id: RecordId) -> String {
    format!("offer_letter_{}.pdf", id)
}

/// "Generate PDF" from the offer letter detail view.
#[derive(Debug, Clone, Default)]
pub struct GeneratePdf {
    pub request: GeneratePdfRequest,
}

#[async_trait]
impl ViewAction<OfferLetters> for GeneratePdf {
    type Output = Download;

    fn action(&self) -> &'static str {
        "generate PDF for"
    }

    async fn run(
        &self,
        client: &ResourceClient<OfferLetters>,
        item: &OfferLetter,
    ) -> ClientResult<Download> {
        client.generate_pdf(item.id, &self.request).await
    }
}
