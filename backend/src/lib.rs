//! Backend: search provider access, configuration and HTTP routes.

pub mod api;
pub mod config;
pub mod provider_utils;
pub mod server_extra;
