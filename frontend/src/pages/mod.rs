pub mod catalog_search_page;
