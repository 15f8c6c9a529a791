//! View layer for the catalog search page: refinement store, per content type results
//! panels and the page controller that sequences their searches.

pub mod api;
pub mod components;
pub mod data_definitions;
pub mod pages;
