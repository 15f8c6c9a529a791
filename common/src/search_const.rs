//! Refinement keys, content types and fixed strings used across the catalog search.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub const QUERY_REFINEMENT: &str = "q";
pub const PAGE_REFINEMENT: &str = "page";
pub const CONTENT_TYPE_REFINEMENT: &str = "content_type";
pub const HIDE_PRICE_REFINEMENT: &str = "hide_card_price";
pub const QUERY_UUID_REFINEMENT: &str = "enterprise_catalog_query_uuids";
pub const CATALOG_QUERY_TITLES_FACET: &str = "enterprise_catalog_query_titles";
pub const PROGRAM_TYPE_FACET: &str = "program_type";

/// Facets always sent to the search provider when refined.
pub const SEARCH_FACET_FILTERS: &[&str] = &[
    CONTENT_TYPE_REFINEMENT,
    "availability",
    "subjects",
    "partners.name",
    "level_type",
    "language",
    "skill_names",
    CATALOG_QUERY_TITLES_FACET,
    QUERY_UUID_REFINEMENT,
];

pub const COURSE_TITLE: &str = "Courses";
pub const PROGRAM_TITLE: &str = "Programs";
pub const ERROR_MESSAGE: &str = "An error occured while retrieving data";
pub const AVAILABLE_UPON_REQUEST: &str = "Available upon request";

pub const CATALOG_WORKBOOK_PATH: &str = "/api/v1/enterprise-catalogs/catalog_workbook";

pub const DEFAULT_HITS_PER_PAGE: u64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Course,
    Program,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Course, ContentType::Program];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Course => "course",
            ContentType::Program => "program",
        }
    }

    pub fn from_refinement_value(value: &str) -> Option<Self> {
        match value {
            "course" => Some(ContentType::Course),
            "program" => Some(ContentType::Program),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ContentType::Course => COURSE_TITLE,
            ContentType::Program => PROGRAM_TITLE,
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
