use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AlgoliaConfig;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchRequest {
    pub query: String,
    pub facet_filters: Vec<Vec<String>>,
    pub page: u64,
    pub hits_per_page: u64,
    pub facets: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchResult {
    #[serde(default)]
    pub hits: Vec<serde_json::Value>,
    #[serde(default)]
    pub nb_hits: u64,
    #[serde(default)]
    pub nb_pages: u64,
    #[serde(default)]
    pub hits_per_page: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub facets: BTreeMap<String, BTreeMap<String, u64>>,
    #[serde(rename = "processingTimeMS", default)]
    pub processing_time_ms: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchProviderError {
    #[error("search provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("search provider returned {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },
    #[error("search provider response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn query_url(config: &AlgoliaConfig) -> String {
    format!("{}/1/indexes/{}/query", config.base_url.trim_end_matches('/'), config.index_name)
}

pub async fn algolia_search(
    config: &AlgoliaConfig,
    request: &RawSearchRequest,
) -> Result<RawSearchResult, SearchProviderError> {
    let t0 = std::time::Instant::now();
    let client = reqwest::Client::new();

    let response = client
        .post(query_url(config))
        .header("X-Algolia-Application-Id", &config.app_id)
        .header("X-Algolia-API-Key", &config.search_api_key)
        .json(request)
        .send()
        .await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        return Err(SearchProviderError::Status { status, body: response_txt });
    }
    let dt_ms = t0.elapsed().as_millis() as u64;
    info!(
        index = %config.index_name,
        response_len = response_txt.len(),
        dt_ms,
        "search provider responded"
    );
    let response: RawSearchResult = serde_json::from_str(&response_txt)?;
    Ok(response)
}
