// src/resources/users.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Deletion, Record, Resource};
use crate::auth::ADMIN;
use crate::common::RecordId;
use crate::listing::FilterState;

// ============================================================================
// User Models
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role_id: RecordId,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Passwords are only sent on create; the backend ignores an absent one
/// on update.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Record for User {
    fn id(&self) -> RecordId {
        self.id
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

pub struct Users;

impl Resource for Users {
    type Item = User;
    type Draft = UserDraft;

    const PATH: &'static str = "/api/users";
    const LABEL: &'static str = "user";
    const PLURAL: &'static str = "users";
    const REQUIRED: &'static [&'static str] = &["name", "email", "roleId"];
    const COLUMNS: &'static [&'static str] = &["id", "name", "email", "roleName"];
    const MANAGERS: &'static [&'static str] = &[ADMIN];
    const DELETION: Deletion = Deletion::Soft;

    fn draft_from(item: &User) -> UserDraft {
        UserDraft {
            name: item.name.clone(),
            email: item.email.clone(),
            role_id: Some(item.role_id),
            password: None,
        }
    }

    fn default_filters() -> FilterState {
        FilterState::new()
            .with("search", "")
            .with("roleId", "")
            .with("includeDeleted", "false")
    }
}
