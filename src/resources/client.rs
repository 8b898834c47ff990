// src/resources/client.rs

use async_trait::async_trait;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, info};

use super::page::{ListQuery, Page};
use super::{Exportable, HasStatus, Record, Resource};
use crate::common::helpers::path_segment;
use crate::common::{ClientResult, RecordId, ValidationResult};
use crate::http::{ApiClient, Download, QueryPairs, NO_QUERY};
use crate::listing::{FilterState, ListSource};

/// CRUD calls for one resource type.
pub struct ResourceClient<R: Resource> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _resource: PhantomData,
        }
    }
}

#[derive(Serialize)]
struct StatusChange<'a> {
    status: &'a str,
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn item_path(id: RecordId) -> String {
        format!("{}/{}", R::PATH, path_segment(id))
    }

    /// GET {path}?page=..&pageSize=..&<filters>
    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<R::Item>> {
        let mut page: Page<R::Item> = self.api.get_json(R::PATH, &query.to_pairs()).await?;
        if page.page_size == 0 {
            page.page_size = query.page_size;
        }

        debug!(
            resource = R::PATH,
            page = page.page,
            returned = page.items.len(),
            total = page.total_count,
            "Listed records"
        );

        Ok(page)
    }

    /// GET {path}/{id}
    pub async fn get(&self, id: RecordId) -> ClientResult<R::Item> {
        self.api.get_json(&Self::item_path(id), NO_QUERY).await
    }

    /// POST {path}; returns the record with its server-assigned id.
    pub async fn create(&self, draft: &R::Draft) -> ClientResult<R::Item> {
        let created: R::Item = self.api.post_json(R::PATH, draft).await?;
        info!(resource = R::PATH, id = created.id(), "Record created");
        Ok(created)
    }

    /// PUT {path}/{id}; `None` when the server answers 204.
    pub async fn update(&self, id: RecordId, draft: &R::Draft) -> ClientResult<Option<R::Item>> {
        let updated = self.api.put_json(&Self::item_path(id), draft).await?;
        info!(resource = R::PATH, id = id, "Record updated");
        Ok(updated)
    }

    /// DELETE {path}/{id}
    pub async fn delete(&self, id: RecordId) -> ClientResult<()> {
        self.api.delete(&Self::item_path(id)).await?;
        info!(resource = R::PATH, id = id, "Record deleted");
        Ok(())
    }
}

impl<R: HasStatus> ResourceClient<R> {
    /// PUT {path}/{id}/status. Unknown statuses are rejected locally.
    pub async fn set_status(&self, id: RecordId, status: &str) -> ClientResult<Option<R::Item>> {
        let Some(status) = R::STATUSES
            .iter()
            .find(|known| known.eq_ignore_ascii_case(status.trim()))
            .copied()
        else {
            let mut result = ValidationResult::new();
            result.add_error(
                "status",
                &format!("Status must be one of: {}", R::STATUSES.join(", ")),
            );
            return Err(result.into());
        };

        let path = format!("{}/status", Self::item_path(id));
        let updated = self.api.put_json(&path, &StatusChange { status }).await?;
        info!(resource = R::PATH, id = id, status = %status, "Status changed");
        Ok(updated)
    }
}

impl<R: Exportable> ResourceClient<R> {
    /// GET {path}/export with the active filters; the body is CSV.
    pub async fn export_csv(&self, filters: &FilterState) -> ClientResult<Download> {
        let pairs: QueryPairs = filters
            .active()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        let path = format!("{}/export", R::PATH);
        let download = self.api.get_bytes(&path, &pairs).await?;
        info!(
            resource = R::PATH,
            bytes = download.len(),
            "Export downloaded"
        );
        Ok(download)
    }
}

#[async_trait]
impl<R: Resource> ListSource for ResourceClient<R> {
    type Item = R::Item;

    async fn fetch_page(&self, query: &ListQuery) -> ClientResult<Page<Self::Item>> {
        self.list(query).await
    }
}
