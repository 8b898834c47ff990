// src/resources/positions.rs

use serde::{Deserialize, Serialize};

use super::{Record, Resource};
use crate::common::RecordId;
use crate::listing::FilterState;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: RecordId,
    pub title: String,
    pub department: String,
    #[serde(default)]
    pub headcount: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionDraft {
    pub title: String,
    pub department: String,
    pub headcount: Option<u32>,
    pub description: Option<String>,
}

impl Record for Position {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct Positions;

impl Resource for Positions {
    type Item = Position;
    type Draft = PositionDraft;

    const PATH: &'static str = "/api/positions";
    const LABEL: &'static str = "position";
    const PLURAL: &'static str = "positions";
    const REQUIRED: &'static [&'static str] = &["title", "department"];
    const COLUMNS: &'static [&'static str] = &["id", "title", "department", "headcount"];

    fn draft_from(item: &Position) -> PositionDraft {
        PositionDraft {
            title: item.title.clone(),
            department: item.department.clone(),
            headcount: item.headcount,
            description: item.description.clone(),
        }
    }

    fn default_filters() -> FilterState {
        FilterState::new().with("search", "").with("department", "")
    }
}
