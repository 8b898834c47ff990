// src/services/mod.rs
//
// Cross-resource services: lookup fan-out and reporting

pub mod lookups;
pub mod reports;

// Re-export commonly used types for convenience
pub use lookups::{LookupItem, LookupService, LookupTable, Lookups};
pub use reports::{DashboardSummary, PipelineStage, ReportService};
