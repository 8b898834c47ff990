// src/cli/args.rs

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use recruit_console::{ClientConfig, RecordId};

#[derive(Parser, Debug)]
#[command(
    name = "recruitctl",
    version,
    about = "Command-line console for the recruitment backend"
)]
pub struct Cli {
    /// Backend base URL (overrides RECRUIT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token (overrides RECRUIT_API_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Role used for the management gate instead of the token's claim
    #[arg(long, global = true)]
    pub role: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Flags win over environment values.
    pub fn apply_overrides(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.api_url {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        if let Some(role) = &self.role {
            config.role = Some(role.clone());
        }
        if let Command::List {
            page_size: Some(size),
            ..
        } = &self.command
        {
            config.page_size = (*size).max(1);
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List one page of a resource
    List {
        resource: ResourceKind,
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
        /// Extra filter as field=value (repeatable)
        #[arg(long = "filter", value_parser = parse_pair)]
        filters: Vec<(String, String)>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Show one record
    Show { resource: ResourceKind, id: RecordId },
    /// Create a record from field=value pairs
    Create {
        resource: ResourceKind,
        #[arg(long = "field", value_parser = parse_pair)]
        fields: Vec<(String, String)>,
    },
    /// Update a record; unspecified fields keep their current values
    Update {
        resource: ResourceKind,
        id: RecordId,
        #[arg(long = "field", value_parser = parse_pair)]
        fields: Vec<(String, String)>,
    },
    /// Delete a record (jobs are closed, users are deactivated)
    Delete { resource: ResourceKind, id: RecordId },
    /// Download a CSV export
    Export {
        resource: ExportKind,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        search: Option<String>,
    },
    /// Generate an offer letter PDF
    OfferPdf {
        id: RecordId,
        #[arg(long)]
        out: PathBuf,
    },
    /// Download a stored document
    Download {
        id: RecordId,
        #[arg(long)]
        out: PathBuf,
    },
    /// Upload a document
    Upload {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        candidate_id: Option<RecordId>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Upload a candidate's resume
    Resume {
        candidate_id: RecordId,
        #[arg(long)]
        file: PathBuf,
    },
    /// Run automated screening on an application
    Screen { id: RecordId },
    /// Change the status of a record
    Status {
        resource: StatusKind,
        id: RecordId,
        status: String,
    },
    /// Show the reporting dashboard
    Dashboard,
    /// Show every lookup collection
    Lookups,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Skills,
    Qualifications,
    JobTypes,
    Roles,
    Users,
    EmailTemplates,
    Documents,
    Events,
    Verifications,
    Jobs,
    Candidates,
    OfferLetters,
    Interviews,
    Positions,
    Applications,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Jobs,
    Verifications,
    Interviews,
    Applications,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Jobs,
    Candidates,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected field=value, got '{}'", raw)),
    }
}
