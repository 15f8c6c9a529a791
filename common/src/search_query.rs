//! Shared search query models and the projection from refinement state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    catalog_config::CatalogConfig,
    refinement::RefinementState,
    search_const::{CONTENT_TYPE_REFINEMENT, ContentType, DEFAULT_HITS_PER_PAGE},
};


/// A provider request. Values inside one facet are OR'd, facets are AND'd.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub query_string: String,
    pub facet_filters: BTreeMap<String, Vec<String>>,
    pub page: u64,
    pub hits_per_page: u64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query_string: String::new(),
            facet_filters: BTreeMap::new(),
            page: 0,
            hits_per_page: DEFAULT_HITS_PER_PAGE,
        }
    }
}

impl SearchQuery {
    pub fn project(state: &RefinementState, config: &CatalogConfig) -> Self {
        let facet_filters = state
            .refinements
            .iter()
            // an empty selection means "no constraint", so the facet is left out entirely
            .filter(|(key, values)| !values.is_empty() && config.is_facet_attribute(key))
            .map(|(key, values)| (key.clone(), values.clone()))
            .collect();

        Self {
            query_string: state.query_text().to_string(),
            facet_filters,
            page: state.current_page(),
            hits_per_page: config.hits_per_page,
        }
    }

    /// Narrows the query to a single content type panel.
    pub fn for_content_type(mut self, content_type: ContentType) -> Self {
        self.facet_filters
            .insert(CONTENT_TYPE_REFINEMENT.to_string(), vec![content_type.as_str().to_string()]);
        self
    }

    pub fn facet_values(&self, facet: &str) -> &[String] {
        self.facet_filters.get(facet).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        refinement::RefinementAction,
        search_const::{HIDE_PRICE_REFINEMENT, PROGRAM_TYPE_FACET, QUERY_REFINEMENT},
    };

    fn state_with(actions: Vec<RefinementAction>) -> RefinementState {
        actions.into_iter().fold(RefinementState::default(), |state, action| state.reduce(action))
    }

    #[test]
    fn projects_text_filters_and_page() {
        let state = state_with(vec![
            RefinementAction::set(QUERY_REFINEMENT, ["math & science"]),
            RefinementAction::set("availability", ["Available Now", "Upcoming"]),
            RefinementAction::set("subjects", ["Math"]),
            RefinementAction::SetPage(2),
        ]);
        let query = SearchQuery::project(&state, &CatalogConfig::default());

        assert_eq!(query.query_string, "math & science");
        assert_eq!(query.page, 2);
        assert_eq!(query.hits_per_page, DEFAULT_HITS_PER_PAGE);
        assert_eq!(
            query.facet_filters,
            BTreeMap::from([
                ("availability".to_string(), vec!["Available Now".to_string(), "Upcoming".to_string()]),
                ("subjects".to_string(), vec!["Math".to_string()]),
            ])
        );
    }

    #[test]
    fn empty_selections_are_never_projected() {
        let state = state_with(vec![
            RefinementAction::set("availability", Vec::<String>::new()),
            RefinementAction::set("subjects", ["Math"]),
        ]);
        let query = SearchQuery::project(&state, &CatalogConfig::default());

        assert!(!query.facet_filters.contains_key("availability"));
        assert!(query.facet_filters.values().all(|values| !values.is_empty()));
    }

    #[test]
    fn reserved_and_unknown_keys_are_ignored() {
        let state = state_with(vec![
            RefinementAction::set(QUERY_REFINEMENT, ["rust"]),
            RefinementAction::set(HIDE_PRICE_REFINEMENT, ["true"]),
            RefinementAction::set("made_up_facet", ["x"]),
        ]);
        let query = SearchQuery::project(&state, &CatalogConfig::default());

        assert!(query.facet_filters.is_empty());
        assert_eq!(query.page, 0);
    }

    #[test]
    fn program_type_facet_follows_feature_flag() {
        let state = state_with(vec![RefinementAction::set(PROGRAM_TYPE_FACET, ["MicroMasters"])]);

        let query = SearchQuery::project(&state, &CatalogConfig::default());
        assert!(query.facet_filters.is_empty());

        let config = CatalogConfig { program_type_facet_enabled: true, ..CatalogConfig::default() };
        let query = SearchQuery::project(&state, &config);
        assert_eq!(query.facet_values(PROGRAM_TYPE_FACET), ["MicroMasters".to_string()]);
    }

    #[test]
    fn content_type_panel_overrides_selection() {
        let state = state_with(vec![RefinementAction::set(CONTENT_TYPE_REFINEMENT, ["course", "program"])]);
        let query = SearchQuery::project(&state, &CatalogConfig::default()).for_content_type(ContentType::Program);
        assert_eq!(query.facet_values(CONTENT_TYPE_REFINEMENT), ["program".to_string()]);
    }
}
