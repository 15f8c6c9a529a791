//! Results panel for one content type.
//!
//! The panel is a small state machine driven only by search outcomes: it never starts
//! searches itself and has no timers. [`CatalogSearchResults::render`] turns the current
//! state into a view model for the card or table renderer.

use common::{
    catalog_config::CatalogConfig,
    catalog_export::ExportRequest,
    catalog_record::CatalogRecord,
    refinement::{RefinementAction, RefinementState},
    search_const::{CONTENT_TYPE_REFINEMENT, ContentType, ERROR_MESSAGE},
    search_query::SearchQuery,
    search_result::{ProviderFailure, SearchResultSet},
};
use serde::Serialize;

use crate::components::search_components::result_columns::{ResultColumn, columns_for};

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    Stalled,
    Errored { message: String },
    Empty(SearchResultSet),
    Populated(SearchResultSet),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataView {
    Card,
    Table,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub page_count: u64,
    pub item_count: u64,
    pub page_size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowAllLink {
    pub text: String,
    pub action: RefinementAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsDeck {
    pub content_type: ContentType,
    pub title: Option<String>,
    pub show_all: Option<ShowAllLink>,
    pub columns: Vec<ResultColumn>,
    pub rows: Vec<CatalogRecord>,
    pub data_view: DataView,
    pub data_view_toggle: bool,
    pub pagination: Option<Pagination>,
    pub export: Option<ExportRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResultsView {
    Skeleton,
    ErrorBanner { text: String },
    NoResults(ResultsDeck),
    Results(ResultsDeck),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSearchResults {
    content_type: ContentType,
    preview: bool,
    data_view: DataView,
    state: ResultsState,
    export_query: SearchQuery,
}

impl CatalogSearchResults {
    pub fn new(content_type: ContentType, preview: bool, config: &CatalogConfig) -> Self {
        Self {
            content_type,
            preview,
            data_view: if config.card_view_enabled { DataView::Card } else { DataView::Table },
            state: ResultsState::Stalled,
            export_query: SearchQuery::default(),
        }
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    pub fn search_started(&mut self) {
        self.state = ResultsState::Stalled;
    }

    /// Applies a search outcome and returns whether the panel now shows "no results".
    ///
    /// `export_query` is the page-wide query behind the search, without this panel's
    /// content type pin, so the workbook covers what the user actually refined.
    pub fn search_finished(
        &mut self,
        outcome: Result<SearchResultSet, ProviderFailure>,
        export_query: SearchQuery,
    ) -> bool {
        self.export_query = export_query;
        self.state = match outcome {
            Err(failure) => ResultsState::Errored { message: failure.message },
            Ok(results) if results.is_empty() => ResultsState::Empty(results),
            Ok(results) => ResultsState::Populated(results),
        };
        tracing::debug!(content_type = %self.content_type, state = state_name(&self.state), "results updated");
        matches!(self.state, ResultsState::Empty(_))
    }

    pub fn set_data_view(&mut self, data_view: DataView) {
        self.data_view = data_view;
    }

    pub fn render(&self, refinements: &RefinementState, config: &CatalogConfig) -> ResultsView {
        match &self.state {
            ResultsState::Stalled => ResultsView::Skeleton,
            ResultsState::Errored { message } => ResultsView::ErrorBanner { text: format!("{ERROR_MESSAGE}: {message}") },
            ResultsState::Empty(results) => ResultsView::NoResults(ResultsDeck {
                title: self.preview_title(refinements, results),
                show_all: None,
                rows: Vec::new(),
                pagination: None,
                export: None,
                ..self.base_deck(refinements, config)
            }),
            ResultsState::Populated(results) => ResultsView::Results(ResultsDeck {
                title: self.preview_title(refinements, results),
                show_all: self.show_all_link(results),
                rows: results
                    .hits
                    .iter()
                    .map(|hit| CatalogRecord::from_hit(hit, self.content_type, &config.catalog_titles))
                    .collect(),
                pagination: (!self.preview).then(|| Pagination {
                    page: refinements.page.unwrap_or(results.page),
                    page_count: results.page_count(),
                    item_count: results.nb_hits,
                    page_size: results.hits_per_page,
                }),
                export: self.export_offered(results).then(|| {
                    ExportRequest::from_search_query(config.export_base_url.clone(), &self.export_query)
                }),
                ..self.base_deck(refinements, config)
            }),
        }
    }

    fn base_deck(&self, refinements: &RefinementState, config: &CatalogConfig) -> ResultsDeck {
        ResultsDeck {
            content_type: self.content_type,
            title: None,
            show_all: None,
            columns: columns_for(self.content_type, refinements.hide_price()),
            rows: Vec::new(),
            data_view: self.data_view,
            data_view_toggle: !self.preview && config.card_view_enabled,
            pagination: None,
            export: None,
        }
    }

    // the landing preview only offers the workbook from the course panel
    fn export_offered(&self, results: &SearchResultSet) -> bool {
        !results.is_empty() && (!self.preview || self.content_type == ContentType::Course)
    }

    fn preview_title(&self, refinements: &RefinementState, results: &SearchResultSet) -> Option<String> {
        if !self.preview {
            return None;
        }
        let sub_title = self.content_type.title();
        let query = refinements.query_text();
        if query.is_empty() {
            return Some(sub_title.to_string());
        }
        Some(format!("\"{query}\" {sub_title} ({})", make_plural(results.nb_hits, "result")))
    }

    fn show_all_link(&self, results: &SearchResultSet) -> Option<ShowAllLink> {
        if !self.preview || results.is_empty() {
            return None;
        }
        Some(ShowAllLink {
            text: format!("Show ({}) >", results.nb_hits),
            action: RefinementAction::set(CONTENT_TYPE_REFINEMENT, [self.content_type.as_str()]),
        })
    }
}

fn make_plural(count: u64, noun: &str) -> String {
    if count == 1 { format!("{count} {noun}") } else { format!("{count} {noun}s") }
}

fn state_name(state: &ResultsState) -> &'static str {
    match state {
        ResultsState::Stalled => "stalled",
        ResultsState::Errored { .. } => "errored",
        ResultsState::Empty(_) => "empty",
        ResultsState::Populated(_) => "populated",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use common::search_const::HIDE_PRICE_REFINEMENT;
    use serde_json::json;

    use super::*;

    fn config() -> CatalogConfig {
        CatalogConfig { export_base_url: "https://catalog.example.com".to_string(), ..CatalogConfig::default() }
    }

    fn result_set(hits: Vec<serde_json::Value>, query: SearchQuery) -> SearchResultSet {
        SearchResultSet {
            query,
            nb_hits: hits.len() as u64,
            nb_pages: if hits.is_empty() { 0 } else { 1 },
            hits,
            hits_per_page: 24,
            page: 0,
            facet_counts: BTreeMap::new(),
        }
    }

    fn refined_query() -> SearchQuery {
        let mut query = SearchQuery { query_string: "math & science".to_string(), ..SearchQuery::default() };
        query.facet_filters.insert("availability".to_string(), vec!["Available Now".to_string()]);
        query
    }

    // the provider sees the panel's content type pin, the export must not
    fn one_course() -> SearchResultSet {
        let query = refined_query().for_content_type(ContentType::Course);
        result_set(vec![json!({"title": "Algebra", "first_enrollable_paid_seat_price": 99})], query)
    }

    #[test]
    fn moves_between_states_on_outcomes() {
        let mut panel = CatalogSearchResults::new(ContentType::Course, false, &config());
        assert_eq!(panel.render(&RefinementState::default(), &config()), ResultsView::Skeleton);

        assert!(!panel.search_finished(Err(ProviderFailure::new("index unavailable")), SearchQuery::default()));
        assert_eq!(
            panel.render(&RefinementState::default(), &config()),
            ResultsView::ErrorBanner { text: "An error occured while retrieving data: index unavailable".to_string() }
        );

        assert!(panel.search_finished(Ok(result_set(vec![], SearchQuery::default())), SearchQuery::default()));
        assert!(matches!(panel.state(), ResultsState::Empty(_)));

        assert!(!panel.search_finished(Ok(one_course()), refined_query()));
        assert!(matches!(panel.state(), ResultsState::Populated(_)));

        panel.search_started();
        assert_eq!(panel.state(), &ResultsState::Stalled);
    }

    #[test]
    fn populated_deck_has_rows_pagination_and_export() {
        let mut panel = CatalogSearchResults::new(ContentType::Course, false, &config());
        panel.search_finished(Ok(one_course()), refined_query());
        let refinements = RefinementState::default().reduce(RefinementAction::SetPage(0));

        let ResultsView::Results(deck) = panel.render(&refinements, &config()) else {
            panic!("expected results");
        };
        assert_eq!(deck.columns[2], ResultColumn::Price);
        assert_eq!(deck.rows.len(), 1);
        assert_eq!(deck.title, None);
        assert_eq!(deck.data_view, DataView::Card);
        assert!(deck.data_view_toggle);
        assert_eq!(
            deck.pagination,
            Some(Pagination { page: 0, page_count: 1, item_count: 1, page_size: 24 })
        );
        assert_eq!(
            deck.export.map(|export| export.to_url()).as_deref(),
            Some("https://catalog.example.com/api/v1/enterprise-catalogs/catalog_workbook?availability=Available%20Now&query=math%20%26%20science")
        );
    }

    #[test]
    fn empty_deck_keeps_columns_and_view_choice() {
        let mut panel = CatalogSearchResults::new(ContentType::Course, false, &config());
        panel.set_data_view(DataView::Table);
        panel.search_finished(Ok(result_set(vec![], SearchQuery::default())), SearchQuery::default());
        let refinements = RefinementState::default().reduce(RefinementAction::set(HIDE_PRICE_REFINEMENT, ["true"]));

        let ResultsView::NoResults(deck) = panel.render(&refinements, &config()) else {
            panic!("expected the no results deck");
        };
        assert_eq!(deck.columns[2], ResultColumn::Availability);
        assert_eq!(deck.data_view, DataView::Table);
        assert!(deck.rows.is_empty());
        assert_eq!(deck.export, None);
        assert_eq!(deck.pagination, None);
    }

    #[test]
    fn preview_mode_titles_and_links() {
        let refinements = RefinementState::default().reduce(RefinementAction::set("q", ["math & science"]));

        let mut courses = CatalogSearchResults::new(ContentType::Course, true, &config());
        courses.search_finished(Ok(one_course()), refined_query());
        let ResultsView::Results(deck) = courses.render(&refinements, &config()) else {
            panic!("expected results");
        };
        assert_eq!(deck.title.as_deref(), Some("\"math & science\" Courses (1 result)"));
        assert_eq!(deck.pagination, None);
        assert!(!deck.data_view_toggle);
        assert!(deck.export.is_some());
        let show_all = deck.show_all.unwrap();
        assert_eq!(show_all.text, "Show (1) >");
        assert_eq!(show_all.action, RefinementAction::set(CONTENT_TYPE_REFINEMENT, ["course"]));

        let mut programs = CatalogSearchResults::new(ContentType::Program, true, &config());
        programs.search_finished(Ok(result_set(vec![json!({}), json!({})], SearchQuery::default())), SearchQuery::default());
        let ResultsView::Results(deck) = programs.render(&RefinementState::default(), &config()) else {
            panic!("expected results");
        };
        assert_eq!(deck.title.as_deref(), Some("Programs"));
        assert_eq!(deck.export, None);
    }

    #[test]
    fn table_view_is_default_without_card_view_flag() {
        let config = CatalogConfig { card_view_enabled: false, ..config() };
        let mut panel = CatalogSearchResults::new(ContentType::Program, false, &config);
        panel.search_finished(Ok(result_set(vec![json!({"title": "Data"})], SearchQuery::default())), SearchQuery::default());
        let ResultsView::Results(deck) = panel.render(&RefinementState::default(), &config) else {
            panic!("expected results");
        };
        assert_eq!(deck.data_view, DataView::Table);
        assert!(!deck.data_view_toggle);
    }
}
