// src/resources/verifications.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{HasStatus, Record, Resource};
use crate::common::RecordId;
use crate::listing::FilterState;

// ============================================================================
// Verification Models
// ============================================================================

/// Background/document verification of a candidate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub id: RecordId,
    pub candidate_id: RecordId,
    #[serde(default)]
    pub candidate_name: Option<String>,
    pub verification_type: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDraft {
    pub candidate_id: Option<RecordId>,
    pub verification_type: String,
    pub remarks: Option<String>,
}

impl Record for Verification {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct Verifications;

impl Resource for Verifications {
    type Item = Verification;
    type Draft = VerificationDraft;

    const PATH: &'static str = "/api/verifications";
    const LABEL: &'static str = "verification";
    const PLURAL: &'static str = "verifications";
    const REQUIRED: &'static [&'static str] = &["candidateId", "verificationType"];
    const COLUMNS: &'static [&'static str] =
        &["id", "candidateName", "verificationType", "status", "verifiedAt"];

    fn draft_from(item: &Verification) -> VerificationDraft {
        VerificationDraft {
            candidate_id: Some(item.candidate_id),
            verification_type: item.verification_type.clone(),
            remarks: item.remarks.clone(),
        }
    }

    fn default_filters() -> FilterState {
        FilterState::new().with("search", "").with("status", "")
    }
}

impl HasStatus for Verifications {
    const STATUSES: &'static [&'static str] = &["Pending", "InProgress", "Verified", "Failed"];
}
