//! Provider round trips against a mocked search index.

use backend::{
    api::search::{search_facet_values, search_for_results},
    config::AlgoliaConfig,
};
use common::search_query::SearchQuery;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

fn config_for(server: &MockServer) -> AlgoliaConfig {
    AlgoliaConfig {
        app_id: "APP".to_string(),
        search_api_key: "search-key".to_string(),
        index_name: "enterprise_catalog".to_string(),
        base_url: server.uri(),
    }
}

fn availability_query() -> SearchQuery {
    let mut query = SearchQuery { query_string: "math & science".to_string(), page: 1, ..SearchQuery::default() };
    query.facet_filters.insert(
        "availability".to_string(),
        vec!["Available Now".to_string(), "Upcoming".to_string()],
    );
    query
}

#[tokio::test]
async fn test_search_for_results_maps_provider_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/indexes/enterprise_catalog/query"))
        .and(header("X-Algolia-Application-Id", "APP"))
        .and(header("X-Algolia-API-Key", "search-key"))
        .and(body_partial_json(json!({
            "query": "math & science",
            "facetFilters": [["availability:Available Now", "availability:Upcoming"]],
            "page": 1,
            "hitsPerPage": 24,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [{"title": "Algebra", "objectID": "c1"}],
            "nbHits": 25,
            "nbPages": 2,
            "hitsPerPage": 24,
            "page": 1,
            "facets": {"availability": {"Available Now": 20, "Upcoming": 5}},
            "processingTimeMS": 3,
        })))
        .mount(&mock_server)
        .await;

    let result = search_for_results(&config_for(&mock_server), availability_query())
        .await
        .unwrap();

    assert_eq!(result.query, availability_query());
    assert_eq!(result.nb_hits, 25);
    assert_eq!(result.page_count(), 2);
    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.facet_counts["availability"]["Upcoming"], 5);
}

#[tokio::test]
async fn test_search_for_results_reports_provider_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Invalid Application-ID or API key"))
        .mount(&mock_server)
        .await;

    let err = search_for_results(&config_for(&mock_server), SearchQuery::default())
        .await
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("403"), "{message}");
    assert!(message.contains("Invalid Application-ID or API key"), "{message}");
}

#[tokio::test]
async fn test_search_facet_values_drops_own_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/indexes/enterprise_catalog/query"))
        .and(body_partial_json(json!({
            "facetFilters": [],
            "hitsPerPage": 0,
            "facets": ["availability"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [],
            "nbHits": 30,
            "facets": {"availability": {"Available Now": 20, "Archived": 10}},
        })))
        .mount(&mock_server)
        .await;

    let facets = search_facet_values(&config_for(&mock_server), availability_query(), "availability".to_string())
        .await
        .unwrap();

    let listed = facets
        .facet_values
        .iter()
        .map(|item| (item.value.as_str(), item.count, item.is_refined))
        .collect::<Vec<_>>();
    assert_eq!(
        listed,
        vec![("Available Now", 20, true), ("Archived", 10, false), ("Upcoming", 0, true)]
    );
}
