// src/services/reports.rs

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::common::ClientResult;
use crate::http::{ApiClient, NO_QUERY};

pub const DASHBOARD_PATH: &str = "/api/reports/dashboard";

/// Applications currently sitting in one pipeline stage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStage {
    pub status: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    pub open_jobs: u64,
    pub total_candidates: u64,
    pub total_applications: u64,
    pub interviews_scheduled: u64,
    pub offers_released: u64,
    pub hires: u64,
    pub pipeline: Vec<PipelineStage>,
}

impl DashboardSummary {
    /// Hires as a share of all applications, in percent.
    pub fn hire_rate(&self) -> f64 {
        if self.total_applications == 0 {
            return 0.0;
        }
        self.hires as f64 * 100.0 / self.total_applications as f64
    }

    pub fn stage(&self, status: &str) -> u64 {
        self.pipeline
            .iter()
            .find(|stage| stage.status.eq_ignore_ascii_case(status))
            .map_or(0, |stage| stage.count)
    }
}

/// Read-only reporting endpoints.
#[derive(Clone)]
pub struct ReportService {
    api: ApiClient,
}

impl ReportService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn dashboard(&self) -> ClientResult<DashboardSummary> {
        let summary: DashboardSummary = self.api.get_json(DASHBOARD_PATH, NO_QUERY).await?;
        info!(
            open_jobs = summary.open_jobs,
            applications = summary.total_applications,
            hires = summary.hires,
            "Dashboard summary fetched"
        );
        Ok(summary)
    }
}
