//! Filter encoding for provider queries.

use common::search_query::SearchQuery;

use crate::provider_utils::algolia_utils::RawSearchRequest;

/// Facet counts are requested for every attribute.
pub const ALL_FACETS: &str = "*";


/// Inner lists are OR'd by the provider, the outer list is AND'd.
pub fn build_facet_filters(query: &SearchQuery) -> Vec<Vec<String>> {
    query
        .facet_filters
        .iter()
        .filter(|(_field_name, values)| !values.is_empty())
        .map(|(field_name, values)| {
            values
                .iter()
                .map(|value| format!("{field_name}:{}", escape_facet_value(value)))
                .collect()
        })
        .collect()
}

// a leading dash would be read as a negated filter
fn escape_facet_value(value: &str) -> String {
    if value.starts_with('-') {
        format!("\\{value}")
    } else {
        value.to_string()
    }
}

pub fn build_search_request(query: &SearchQuery, facets: Vec<String>) -> RawSearchRequest {
    RawSearchRequest {
        query: query.query_string.trim().to_string(),
        facet_filters: build_facet_filters(query),
        page: query.page,
        hits_per_page: query.hits_per_page,
        facets,
    }
}
