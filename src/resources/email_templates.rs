// src/resources/email_templates.rs

use serde::{Deserialize, Serialize};

use super::{Record, Resource};
use crate::common::RecordId;
use crate::listing::FilterState;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplate {
    pub id: RecordId,
    pub name: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplateDraft {
    pub name: String,
    pub subject: String,
    pub body: String,
    pub category: Option<String>,
}

impl Record for EmailTemplate {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct EmailTemplates;

impl Resource for EmailTemplates {
    type Item = EmailTemplate;
    type Draft = EmailTemplateDraft;

    const PATH: &'static str = "/api/emailtemplates";
    const LABEL: &'static str = "email template";
    const PLURAL: &'static str = "email templates";
    const REQUIRED: &'static [&'static str] = &["name", "subject", "body"];
    const COLUMNS: &'static [&'static str] = &["id", "name", "subject", "category"];

    fn draft_from(item: &EmailTemplate) -> EmailTemplateDraft {
        EmailTemplateDraft {
            name: item.name.clone(),
            subject: item.subject.clone(),
            body: item.body.clone(),
            category: item.category.clone(),
        }
    }

    fn default_filters() -> FilterState {
        FilterState::new().with("search", "").with("category", "")
    }
}
