// src/listing/controller.rs
//! Generic paginated list: filters, page, fetch, and load state

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::filters::FilterState;
use super::pagination::PaginationState;
use crate::common::ClientResult;
use crate::notifications::{describe, MessageContext};
use crate::resources::{ListQuery, Page};

// ============================================================================
// Seams
// ============================================================================

/// Anything that can serve one page of a filtered collection.
#[async_trait]
pub trait ListSource: Send + Sync {
    type Item: Clone + Send + Sync + 'static;

    async fn fetch_page(&self, query: &ListQuery) -> ClientResult<Page<Self::Item>>;
}

/// Re-fetch hook handed to modals so they can refresh the list they were
/// opened from after a successful mutation.
#[async_trait]
pub trait Refresh: Send + Sync {
    async fn refresh(&self) -> ClientResult<()>;
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Loaded,
    /// Human-readable message of the last failed load.
    Error(String),
}

/// Point-in-time copy of a list's state, for rendering.
#[derive(Debug, Clone)]
pub struct ListSnapshot<T> {
    pub status: ListStatus,
    pub items: Vec<T>,
    pub filters: FilterState,
    pub pagination: PaginationState,
}

impl<T> ListSnapshot<T> {
    /// Loaded with nothing to show: render the empty state.
    pub fn is_empty(&self) -> bool {
        self.status == ListStatus::Loaded && self.items.is_empty()
    }

    /// Pagination controls are hidden for empty or single-page results.
    pub fn shows_pagination(&self) -> bool {
        self.pagination.total_count > 0 && self.pagination.total_pages > 1
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ListStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct ListState<T> {
    status: ListStatus,
    items: Vec<T>,
    filters: FilterState,
    pagination: PaginationState,
}

impl<T> ListState<T> {
    fn query(&self) -> ListQuery {
        self.filters.active().fold(
            ListQuery::new(self.pagination.current_page, self.pagination.items_per_page),
            |query, (key, value)| query.filter(key, value),
        )
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Drives one list screen: `Idle -> Loading -> (Loaded | Error)`.
///
/// Every load takes a generation number. A response that arrives after a
/// newer load has started is discarded, so overlapping loads always leave
/// the state of the most recent one.
pub struct ListController<S: ListSource> {
    source: S,
    label: &'static str,
    defaults: FilterState,
    state: RwLock<ListState<S::Item>>,
    generation: AtomicU64,
}

impl<S: ListSource> ListController<S> {
    /// `label` is the plural used in messages ("skills").
    pub fn new(source: S, label: &'static str, defaults: FilterState, page_size: u32) -> Self {
        Self {
            source,
            label,
            state: RwLock::new(ListState {
                status: ListStatus::Idle,
                items: Vec::new(),
                filters: defaults.clone(),
                pagination: PaginationState::new(page_size),
            }),
            defaults,
            generation: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn defaults(&self) -> &FilterState {
        &self.defaults
    }

    pub async fn snapshot(&self) -> ListSnapshot<S::Item> {
        let state = self.state.read().await;
        ListSnapshot {
            status: state.status.clone(),
            items: state.items.clone(),
            filters: state.filters.clone(),
            pagination: state.pagination,
        }
    }

    pub async fn status(&self) -> ListStatus {
        self.state.read().await.status.clone()
    }

    pub async fn items(&self) -> Vec<S::Item> {
        self.state.read().await.items.clone()
    }

    pub async fn filters(&self) -> FilterState {
        self.state.read().await.filters.clone()
    }

    pub async fn pagination(&self) -> PaginationState {
        self.state.read().await.pagination
    }

    pub async fn is_empty(&self) -> bool {
        self.snapshot().await.is_empty()
    }

    pub async fn shows_pagination(&self) -> bool {
        self.snapshot().await.shows_pagination()
    }

    /// Edits one filter field without fetching; see [`Self::apply_filters`].
    pub async fn set_filter(&self, key: &str, value: &str) {
        self.state.write().await.filters.set(key, value);
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Fetches the current page with the current filters.
    ///
    /// On failure the error's human message is stored as the `Error` status
    /// and the error is returned. A response superseded by a newer load is
    /// dropped and reported as `Ok`.
    pub async fn load(&self) -> ClientResult<()> {
        loop {
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            let query = {
                let mut state = self.state.write().await;
                state.status = ListStatus::Loading;
                state.query()
            };

            let result = self.source.fetch_page(&query).await;

            let mut state = self.state.write().await;
            if self.generation.load(Ordering::SeqCst) != generation {
                debug!(
                    list = self.label,
                    generation = generation,
                    "Discarding stale list response"
                );
                return Ok(());
            }

            match result {
                Ok(page) => {
                    state.pagination.current_page = query.page;
                    state.pagination.update(page.total_count, page.page_size);

                    // The collection shrank under us; fetch the last real page.
                    if state.pagination.current_page < query.page && page.items.is_empty() {
                        debug!(
                            list = self.label,
                            requested = query.page,
                            clamped = state.pagination.current_page,
                            "Requested page out of range, reloading"
                        );
                        continue;
                    }

                    debug!(
                        list = self.label,
                        page = state.pagination.current_page,
                        items = page.items.len(),
                        total = state.pagination.total_count,
                        "List loaded"
                    );
                    state.items = page.items;
                    state.status = ListStatus::Loaded;
                    return Ok(());
                }
                Err(err) => {
                    let message = describe(&err, &MessageContext::new("load", self.label));
                    warn!(list = self.label, error = %err, "List load failed");
                    state.items.clear();
                    state.status = ListStatus::Error(message);
                    return Err(err);
                }
            }
        }
    }

    /// Back to page 1 with the current filters.
    pub async fn apply_filters(&self) -> ClientResult<()> {
        self.state.write().await.pagination.reset();
        self.load().await
    }

    /// Restores the default filters and page 1.
    pub async fn clear_filters(&self) -> ClientResult<()> {
        {
            let mut state = self.state.write().await;
            state.filters = self.defaults.clone();
            state.pagination.reset();
        }
        self.load().await
    }

    /// Moves to page `page`, clamped to `[1, total_pages]`.
    pub async fn change_page(&self, page: u32) -> ClientResult<()> {
        {
            let mut state = self.state.write().await;
            state.pagination.current_page = state.pagination.clamp(page);
        }
        self.load().await
    }
}

#[async_trait]
impl<S: ListSource> Refresh for ListController<S> {
    async fn refresh(&self) -> ClientResult<()> {
        self.load().await
    }
}

impl<S: ListSource> std::fmt::Debug for ListController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListController")
            .field("label", &self.label)
            .field("generation", &self.generation.load(Ordering::Relaxed))
            .finish()
    }
}

/// Slices one page out of an in-memory collection.
pub fn page_of<T: Clone>(items: &[T], query: &ListQuery) -> Page<T> {
    let per_page = query.page_size.max(1) as usize;
    let start = (query.page.max(1) as usize - 1).saturating_mul(per_page);
    Page {
        items: items.iter().skip(start).take(per_page).cloned().collect(),
        total_count: items.len() as u64,
        page: query.page,
        page_size: query.page_size,
    }
}
