pub mod catalog_selection;
pub mod search_components;
