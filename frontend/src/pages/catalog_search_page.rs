//! Catalog search page: one refinement store feeding a results panel per content type.

use std::collections::BTreeMap;

use common::{
    catalog_config::CatalogConfig,
    refinement::{RefinementAction, RefinementState},
    search_const::ContentType,
    search_query::SearchQuery,
    search_result::{ProviderFailure, SearchResultSet},
};

use crate::{
    api::search_api::SearchProvider,
    components::{
        catalog_selection::select_catalog_action,
        search_components::catalog_search_results::{CatalogSearchResults, DataView, ResultsView},
    },
    data_definitions::{
        empty_state::EmptyStateReporter,
        refinement_store::{RefinementStore, SubscriberId},
    },
};

/// A search handed out by [`CatalogSearchPage::begin_searches`]. Only the most recent
/// sequence per content type is allowed to land.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub sequence: u64,
    pub content_type: ContentType,
    /// Sent to the provider, narrowed to `content_type`.
    pub query: SearchQuery,
    /// The same refinements without the content type pin. Exports are built from it.
    pub export_query: SearchQuery,
}

pub struct CatalogSearchPage<P: SearchProvider> {
    config: CatalogConfig,
    provider: P,
    store: RefinementStore,
    results: BTreeMap<ContentType, CatalogSearchResults>,
    empty_state: EmptyStateReporter,
    next_sequence: u64,
    latest_sequence: BTreeMap<ContentType, u64>,
}

impl<P: SearchProvider> CatalogSearchPage<P> {
    pub fn new(
        config: CatalogConfig,
        provider: P,
        store: RefinementStore,
        preview: bool,
        on_empty_state_change: impl FnMut(ContentType, bool) + 'static,
    ) -> Self {
        let results = ContentType::ALL
            .into_iter()
            .map(|ct| (ct, CatalogSearchResults::new(ct, preview, &config)))
            .collect();
        Self {
            config,
            provider,
            store,
            results,
            empty_state: EmptyStateReporter::new(on_empty_state_change),
            next_sequence: 0,
            latest_sequence: BTreeMap::new(),
        }
    }

    pub fn store(&self) -> &RefinementStore {
        &self.store
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&RefinementState) + 'static) -> SubscriberId {
        self.store.subscribe(subscriber)
    }

    /// Applies a refinement change. Panels that drop out of view lose their empty flag and
    /// any search still in flight for them.
    pub fn dispatch(&mut self, action: RefinementAction) {
        let before = self.store.state().active_content_types();
        let after = self.store.dispatch(action).active_content_types();
        for content_type in before.into_iter().filter(|ct| !after.contains(ct)) {
            self.latest_sequence.remove(&content_type);
            self.empty_state.reset(content_type);
        }
    }

    /// Returns whether the selection changed anything.
    pub fn select_catalog(&mut self, query_uuid: &str) -> bool {
        match select_catalog_action(self.store.state(), query_uuid) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Marks every visible panel as stalled and hands out one search per panel.
    pub fn begin_searches(&mut self) -> Vec<PendingSearch> {
        let state = self.store.state();
        let base_query = SearchQuery::project(state, &self.config);
        let mut pending = Vec::new();
        for content_type in state.active_content_types() {
            let sequence = self.next_sequence;
            self.next_sequence += 1;
            self.latest_sequence.insert(content_type, sequence);
            if let Some(panel) = self.results.get_mut(&content_type) {
                panel.search_started();
            }
            pending.push(PendingSearch {
                sequence,
                content_type,
                query: base_query.clone().for_content_type(content_type),
                export_query: base_query.clone(),
            });
        }
        pending
    }

    /// Lands a search outcome. Returns `false` when a newer search made it stale.
    pub fn complete_search(&mut self, pending: PendingSearch, outcome: Result<SearchResultSet, ProviderFailure>) -> bool {
        if self.latest_sequence.get(&pending.content_type) != Some(&pending.sequence) {
            tracing::debug!(
                content_type = %pending.content_type,
                sequence = pending.sequence,
                "discarding stale search response"
            );
            return false;
        }
        let Some(panel) = self.results.get_mut(&pending.content_type) else {
            return false;
        };
        let is_empty = panel.search_finished(outcome, pending.export_query);
        self.empty_state.report(pending.content_type, is_empty);
        true
    }

    pub async fn refresh(&mut self) {
        for pending in self.begin_searches() {
            let outcome = self.provider.search(pending.query.clone()).await;
            self.complete_search(pending, outcome);
        }
    }

    pub fn results(&self, content_type: ContentType) -> Option<&CatalogSearchResults> {
        self.results.get(&content_type)
    }

    pub fn set_data_view(&mut self, content_type: ContentType, data_view: DataView) {
        if let Some(panel) = self.results.get_mut(&content_type) {
            panel.set_data_view(data_view);
        }
    }

    /// View for a panel, or `None` when its content type is filtered out.
    pub fn render(&self, content_type: ContentType) -> Option<ResultsView> {
        let state = self.store.state();
        if !state.active_content_types().contains(&content_type) {
            return None;
        }
        self.results.get(&content_type).map(|panel| panel.render(state, &self.config))
    }

    pub fn is_empty(&self, content_type: ContentType) -> bool {
        self.empty_state.is_empty(content_type)
    }
}
