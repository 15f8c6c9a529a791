//! JSON routes in front of the search provider.

use std::sync::Arc;

use axum::{Json, extract::{Path, State}, http::StatusCode, response::{IntoResponse, Response}};
use common::{search_query::SearchQuery, search_result::ProviderFailure};

use crate::api::search::{search_facet_values, search_for_results};
use crate::config::AppConfig;

fn provider_failure(route: &str, e: anyhow::Error) -> Response {
    tracing::error!("{route}: request failed: {:#?}", e);
    (StatusCode::BAD_GATEWAY, Json(ProviderFailure::new(format!("{e:#}")))).into_response()
}

pub async fn search(State(config): State<Arc<AppConfig>>, Json(query): Json<SearchQuery>) -> Response {
    match search_for_results(&config.algolia, query).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => provider_failure("search", e),
    }
}

pub async fn search_facet(
    State(config): State<Arc<AppConfig>>,
    Path(facet_field): Path<String>,
    Json(query): Json<SearchQuery>,
) -> Response {
    match search_facet_values(&config.algolia, query, facet_field).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => provider_failure("search_facet", e),
    }
}
