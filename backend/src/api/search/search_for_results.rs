//! Search endpoint for result lists.

use anyhow::Context;
use common::{search_query::SearchQuery, search_result::SearchResultSet};

use crate::api::search::search_filters::{ALL_FACETS, build_search_request};
use crate::config::AlgoliaConfig;
use crate::provider_utils::algolia_utils::algolia_search;

pub async fn search_for_results(config: &AlgoliaConfig, query: SearchQuery) -> anyhow::Result<SearchResultSet> {
    let request = build_search_request(&query, vec![ALL_FACETS.to_string()]);
    tracing::debug!(facet_filters = ?request.facet_filters, page = request.page, "searching for results");

    let response = algolia_search(config, &request)
        .await
        .context("search for results failed")?;

    Ok(SearchResultSet {
        query,
        hits: response.hits,
        nb_hits: response.nb_hits,
        nb_pages: response.nb_pages,
        hits_per_page: response.hits_per_page,
        page: response.page,
        facet_counts: response.facets,
    })
}
