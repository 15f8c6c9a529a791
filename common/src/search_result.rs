use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::search_query::SearchQuery;


/// One provider response. Replaced wholesale on every search, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultSet {
    pub query: SearchQuery,
    pub hits: Vec<serde_json::Value>,
    pub nb_hits: u64,
    pub nb_pages: u64,
    pub hits_per_page: u64,
    pub page: u64,
    pub facet_counts: BTreeMap<String, BTreeMap<String, u64>>,
}

impl SearchResultSet {
    pub fn is_empty(&self) -> bool {
        self.nb_hits == 0
    }

    pub fn page_count(&self) -> u64 {
        self.nb_pages.max(1)
    }

    pub fn facet_items(&self, facet_field: &str) -> SearchResultFacets {
        let empty = BTreeMap::new();
        let counts = self.facet_counts.get(facet_field).unwrap_or(&empty);
        SearchResultFacets::from_counts(self.query.clone(), facet_field, counts)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultFacets {
    pub query: SearchQuery,
    pub facet_field: String,
    pub facet_values: Vec<SearchResultFacetItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultFacetItem {
    pub value: String,
    pub count: u64,
    pub is_refined: bool,
}

impl SearchResultFacets {
    /// Builds the value list for one facet, most frequent first. Values selected in the
    /// query but absent from the counts are kept with a zero count so they can be unchecked.
    pub fn from_counts(query: SearchQuery, facet_field: &str, counts: &BTreeMap<String, u64>) -> Self {
        let selected = query.facet_values(facet_field).to_vec();
        let mut facet_values = counts
            .iter()
            .map(|(value, count)| SearchResultFacetItem {
                value: value.clone(),
                count: *count,
                is_refined: selected.contains(value),
            })
            .collect::<Vec<_>>();
        facet_values.sort_by_key(|item| (u64::MAX - item.count, item.value.clone()));

        for value in selected {
            if !counts.contains_key(&value) {
                facet_values.push(SearchResultFacetItem { value, count: 0, is_refined: true });
            }
        }

        Self { query, facet_field: facet_field.to_string(), facet_values }
    }
}

/// Provider failure as seen by the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ProviderFailure {
    pub message: String,
}

impl ProviderFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
