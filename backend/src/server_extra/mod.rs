use std::sync::Arc;

use axum::{Json, Router, extract::{Request, State}, middleware::Next, routing::{get, post}};
use common::catalog_config::CatalogConfig;

use crate::config::AppConfig;

pub mod catalog_workbook;
pub mod search_routes;

pub fn router(config: AppConfig) -> Router {
    Router::new()
        .route("/_search", post(search_routes::search))
        .route("/_search_facet/{facet_field}", post(search_routes::search_facet))
        .route("/_catalog_config", get(catalog_config))
        .route("/_download_catalog_workbook/{state}", get(catalog_workbook::download_catalog_workbook))
        // we can apply a layer to the entire router using axum's `.layer` method
        .layer(axum::middleware::from_fn(
            |request: Request, next: Next| async move {
                let method = request.method().clone();
                let path = request.uri().path().to_string();
                let res = next.run(request).await;
                tracing::debug!(%method, %path, status = %res.status(), "request handled");
                res
            },
        ))
        .with_state(Arc::new(config))
}

async fn catalog_config(State(config): State<Arc<AppConfig>>) -> Json<CatalogConfig> {
    Json(config.catalog.clone())
}
