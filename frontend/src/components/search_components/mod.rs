pub mod catalog_search_results;
pub mod result_columns;
