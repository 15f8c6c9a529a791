use std::sync::Arc;

use anyhow::Context;
use axum::{body::Body, extract::{Path, State}, http::StatusCode, response::{IntoResponse, Redirect, Response}};
use common::{catalog_export::ExportRequest, refinement::RefinementState, search_query::SearchQuery, url_param::UrlParam};
use tracing::info;

use crate::config::AppConfig;

fn _download_catalog_workbook(config: &AppConfig, state: &str) -> anyhow::Result<String> {
    let UrlParam(refinements) = state
        .parse::<UrlParam<RefinementState>>()
        .context("Failed to parse refinement state")?;
    let query = SearchQuery::project(&refinements, &config.catalog);
    let export = ExportRequest::from_search_query(config.catalog.export_base_url.clone(), &query);
    let url = export.to_url();
    info!("Exporting catalog workbook: {}", url);
    Ok(url)
}

/// Redirects to the catalog service workbook for the encoded refinement state.
pub async fn download_catalog_workbook(
    State(config): State<Arc<AppConfig>>,
    Path(state): Path<String>,
) -> Response {
    match _download_catalog_workbook(&config, &state) {
        Ok(url) => Redirect::to(&url).into_response(),
        Err(e) => {
            tracing::error!("download_catalog_workbook: request failed: {:#?}", e);
            (StatusCode::BAD_REQUEST, Body::from(format!("{e:#}"))).into_response()
        }
    }
}
