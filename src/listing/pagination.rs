// src/listing/pagination.rs

use serde::Serialize;

/// Server-side pagination bookkeeping for one list.
///
/// `total_pages` is always at least 1 and `current_page` always lies in
/// `[1, total_pages]`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub current_page: u32,
    pub items_per_page: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

impl PaginationState {
    pub fn new(items_per_page: u32) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_count: 0,
            total_pages: 1,
        }
    }

    /// Records a server response. The current page is re-clamped because
    /// the collection may have shrunk since the request was made.
    pub fn update(&mut self, total_count: u64, items_per_page: u32) {
        if items_per_page > 0 {
            self.items_per_page = items_per_page;
        }
        self.total_count = total_count;
        self.total_pages = total_pages(total_count, self.items_per_page);
        self.current_page = self.clamp(self.current_page);
    }

    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages)
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page-link window: both edges plus a run around the current page,
    /// with `None` marking a gap.
    pub fn page_links(&self) -> Vec<Option<u32>> {
        window(self.total_pages, self.current_page, 2, 2, 4, 2)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(10)
    }
}

/// `max(1, ceil(total_count / items_per_page))`
pub fn total_pages(total_count: u64, items_per_page: u32) -> u32 {
    let per_page = u64::from(items_per_page.max(1));
    let pages = total_count.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

fn window(
    last_page: u32,
    current: u32,
    left_edge: u32,
    left_current: u32,
    right_current: u32,
    right_edge: u32,
) -> Vec<Option<u32>> {
    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current.saturating_sub(left_current));
    let mid_end = current
        .saturating_add(right_current + 1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);
    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_formula() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_update_clamps_current_page() {
        let mut state = PaginationState::new(10);
        state.update(95, 10);
        state.current_page = 10;

        state.update(25, 10);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.current_page, 3);

        state.update(0, 10);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_clamp_bounds() {
        let mut state = PaginationState::new(10);
        state.update(42, 10);

        assert_eq!(state.clamp(0), 1);
        assert_eq!(state.clamp(3), 3);
        assert_eq!(state.clamp(99), 5);
    }

    #[test]
    fn test_page_links_window() {
        let mut state = PaginationState::new(10);
        state.update(300, 10);
        state.current_page = 15;

        let links = state.page_links();
        assert_eq!(&links[..2], &[Some(1), Some(2)]);
        assert_eq!(links[2], None);
        assert!(links.contains(&Some(15)));
        assert!(links.contains(&Some(19)));
        assert_eq!(&links[links.len() - 2..], &[Some(29), Some(30)]);
    }

    #[test]
    fn test_page_links_small_collection() {
        let mut state = PaginationState::new(10);
        state.update(30, 10);
        assert_eq!(state.page_links(), vec![Some(1), Some(2), Some(3)]);
    }
}
