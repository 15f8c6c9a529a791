//! Search API functions and module exports.

mod search_for_results;
pub use search_for_results::search_for_results;


mod search_facets;
pub use search_facets::search_facet_values;

pub mod search_filters;
