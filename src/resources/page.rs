// src/resources/page.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::http::QueryPairs;

// ============================================================================
// Paginated list response
// ============================================================================

/// One page of a server-side paginated collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default, alias = "total")]
    pub total_count: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
}

fn first_page() -> u32 {
    1
}

// ============================================================================
// List query
// ============================================================================

/// Page request plus the active filters. Blank filter values are never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            filters: BTreeMap::new(),
        }
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            self.filters.insert(key.into(), value.to_string());
        }
        self
    }

    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        pairs.extend(
            self.filters
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_skip_blank_filters() {
        let query = ListQuery::new(0, 25)
            .filter("search", "  React ")
            .filter("status", "")
            .filter("jobTypeId", "3");

        assert_eq!(query.page, 1);
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("pageSize".to_string(), "25".to_string()),
                ("jobTypeId".to_string(), "3".to_string()),
                ("search".to_string(), "React".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_envelope_defaults() {
        let page: Page<serde_json::Value> =
            serde_json::from_str(r#"{"items":[{"id":1}],"total":41}"#).expect("page");
        assert_eq!(page.total_count, 41);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 0);
    }
}
