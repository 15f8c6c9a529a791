//! Search calls made on behalf of the results panels.

use std::future::Future;

use common::{search_query::SearchQuery, search_result::{ProviderFailure, SearchResultSet}};

/// Anything that can answer a projected query. Failures arrive already reduced to a
/// displayable message.
pub trait SearchProvider {
    fn search(&self, query: SearchQuery) -> impl Future<Output = Result<SearchResultSet, ProviderFailure>>;
}

/// Calls the backend search client in-process.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct BackendSearchProvider {
    pub config: backend::config::AlgoliaConfig,
}

#[cfg(feature = "server")]
impl SearchProvider for BackendSearchProvider {
    async fn search(&self, query: SearchQuery) -> Result<SearchResultSet, ProviderFailure> {
        let x = backend::api::search::search_for_results(&self.config, query).await;
        x.map_err(|e| ProviderFailure::new(format!("{e:#}")))
    }
}
