//! Deployment settings that shape queries and results rendering.

use serde::{Deserialize, Serialize};

use crate::search_const::{DEFAULT_HITS_PER_PAGE, PROGRAM_TYPE_FACET, SEARCH_FACET_FILTERS};

/// Literal catalog titles used to flag catalog membership on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogTitles {
    pub a_la_carte: Option<String>,
    pub business: Option<String>,
    pub education: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub catalog_titles: CatalogTitles,
    pub export_base_url: String,
    pub card_view_enabled: bool,
    pub program_type_facet_enabled: bool,
    pub hits_per_page: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_titles: CatalogTitles::default(),
            export_base_url: String::new(),
            card_view_enabled: true,
            program_type_facet_enabled: false,
            hits_per_page: DEFAULT_HITS_PER_PAGE,
        }
    }
}

impl CatalogConfig {
    pub fn facet_attributes(&self) -> Vec<&'static str> {
        let mut attributes = SEARCH_FACET_FILTERS.to_vec();
        if self.program_type_facet_enabled {
            attributes.push(PROGRAM_TYPE_FACET);
        }
        attributes
    }

    pub fn is_facet_attribute(&self, key: &str) -> bool {
        self.facet_attributes().contains(&key)
    }
}
