//! Search facets endpoint and response shaping.

use anyhow::Context;
use common::{search_query::SearchQuery, search_result::SearchResultFacets};

use crate::api::search::search_filters::build_search_request;
use crate::config::AlgoliaConfig;
use crate::provider_utils::algolia_utils::algolia_search;

pub async fn search_facet_values(
    config: &AlgoliaConfig,
    query: SearchQuery,
    facet_field: String,
) -> anyhow::Result<SearchResultFacets> {
    // remove all filters on the current facet, as we don't want to filter out unselected values from the counts
    let mut counting_query = query.clone();
    counting_query.facet_filters.remove(&facet_field);
    counting_query.page = 0;
    counting_query.hits_per_page = 0;

    let request = build_search_request(&counting_query, vec![facet_field.clone()]);
    let response = algolia_search(config, &request)
        .await
        .with_context(|| format!("facet search for {facet_field} failed"))?;

    let counts = response.facets.get(&facet_field).cloned().unwrap_or_default();
    Ok(SearchResultFacets::from_counts(query, &facet_field, &counts))
}
