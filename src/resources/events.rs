// src/resources/events.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, Resource};
use crate::auth::{ADMIN, HR, RECRUITER};
use crate::common::RecordId;
use crate::listing::FilterState;

// ============================================================================
// Event Models
// ============================================================================

/// Hiring events: job fairs, campus drives, walk-ins.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

impl Record for Event {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct Events;

impl Resource for Events {
    type Item = Event;
    type Draft = EventDraft;

    const PATH: &'static str = "/api/events";
    const LABEL: &'static str = "event";
    const PLURAL: &'static str = "events";
    const REQUIRED: &'static [&'static str] = &["title", "startDate"];
    const COLUMNS: &'static [&'static str] = &["id", "title", "eventType", "startDate", "location"];
    const MANAGERS: &'static [&'static str] = &[ADMIN, HR, RECRUITER];

    fn draft_from(item: &Event) -> EventDraft {
        EventDraft {
            title: item.title.clone(),
            description: item.description.clone(),
            event_type: item.event_type.clone(),
            start_date: Some(item.start_date),
            end_date: item.end_date,
            location: item.location.clone(),
        }
    }

    fn default_filters() -> FilterState {
        FilterState::new().with("search", "").with("eventType", "")
    }
}
