// src/services/lookups.rs
//
// Reference collections fetched once per page load to populate selects
// and turn foreign-key ids into display names.

use futures::try_join;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::common::{ClientResult, RecordId};
use crate::http::ApiClient;
use crate::resources::{JobTypes, Page, Qualifications, Resource, Roles, Skills};

/// Lookup lists are small; one oversized page fetches all of them.
const LOOKUP_PAGE_SIZE: u32 = 1000;

/// Statuses have no resource of their own.
pub const STATUSES_PATH: &str = "/api/statuses";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LookupItem {
    pub id: RecordId,
    pub name: String,
}

/// Lookup endpoints answer either a bare array or the paged envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum LookupBody {
    Plain(Vec<LookupItem>),
    Paged(Page<LookupItem>),
}

impl LookupBody {
    fn into_items(self) -> Vec<LookupItem> {
        match self {
            LookupBody::Plain(items) => items,
            LookupBody::Paged(page) => page.items,
        }
    }
}

/// One reference list with id to name resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupTable {
    items: Vec<LookupItem>,
    by_id: HashMap<RecordId, usize>,
}

impl LookupTable {
    pub fn new(items: Vec<LookupItem>) -> Self {
        let by_id = items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.id, index))
            .collect();
        Self { items, by_id }
    }

    pub fn items(&self) -> &[LookupItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn name(&self, id: RecordId) -> Option<&str> {
        self.by_id
            .get(&id)
            .map(|index| self.items[*index].name.as_str())
    }

    /// Display name, or the raw id when the list does not know it.
    pub fn label(&self, id: Option<RecordId>) -> String {
        match id {
            Some(id) => self
                .name(id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{}", id)),
            None => "-".to_string(),
        }
    }

    /// Case-insensitive reverse lookup, for filters typed by name.
    pub fn id_of(&self, name: &str) -> Option<RecordId> {
        let name = name.trim();
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
            .map(|item| item.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookups {
    pub statuses: LookupTable,
    pub job_types: LookupTable,
    pub skills: LookupTable,
    pub qualifications: LookupTable,
    pub roles: LookupTable,
}

/// Fetches every lookup collection concurrently.
#[derive(Clone)]
pub struct LookupService {
    api: ApiClient,
}

impl LookupService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// All five collections, or the first failure.
    pub async fn load(&self) -> ClientResult<Lookups> {
        let (statuses, job_types, skills, qualifications, roles) = try_join!(
            self.fetch(STATUSES_PATH),
            self.fetch(JobTypes::PATH),
            self.fetch(Skills::PATH),
            self.fetch(Qualifications::PATH),
            self.fetch(Roles::PATH),
        )?;

        let lookups = Lookups {
            statuses,
            job_types,
            skills,
            qualifications,
            roles,
        };

        info!(
            statuses = lookups.statuses.len(),
            job_types = lookups.job_types.len(),
            skills = lookups.skills.len(),
            qualifications = lookups.qualifications.len(),
            roles = lookups.roles.len(),
            "Lookups loaded"
        );
        Ok(lookups)
    }

    pub async fn fetch(&self, path: &str) -> ClientResult<LookupTable> {
        let page_size = LOOKUP_PAGE_SIZE.to_string();
        let query = [("page", "1"), ("pageSize", page_size.as_str())];

        let body: LookupBody = self.api.get_json(path, &query).await?;
        let items = body.into_items();
        debug!(path = %path, count = items.len(), "Lookup fetched");
        Ok(LookupTable::new(items))
    }
}
