//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod refinement;
pub mod search_query;
pub mod search_result;
pub mod catalog_config;
pub mod catalog_record;
pub mod catalog_export;
pub mod url_param;
