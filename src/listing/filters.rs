// src/listing/filters.rs

use std::collections::BTreeMap;

/// Current filter-field values of one list screen.
///
/// An empty value means "no filter" and is never sent to the server. The
/// key order is stable so query strings are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    values: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterState::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Non-blank `(field, value)` pairs, trimmed.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().filter_map(|(key, value)| {
            let value = value.trim();
            (!value.is_empty()).then_some((key.as_str(), value))
        })
    }

    pub fn is_active(&self) -> bool {
        self.active().next().is_some()
    }
}
