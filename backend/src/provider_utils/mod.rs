//! Access to the hosted search provider.

pub mod algolia_utils;
