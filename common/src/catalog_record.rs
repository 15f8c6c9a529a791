//! Normalization of raw provider hits into course and program records.
//!
//! Hits come straight from the search index, so every field is optional here: a
//! missing or mistyped attribute becomes `None` (or an empty list) instead of an error.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    catalog_config::CatalogTitles,
    search_const::{AVAILABLE_UPON_REQUEST, CATALOG_QUERY_TITLES_FACET, ContentType},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogRecord {
    Course(CourseRecord),
    Program(ProgramRecord),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub object_id: Option<String>,
    pub title: Option<String>,
    pub partner_name: Option<String>,
    pub price: Option<String>,
    pub catalog_query_titles: Vec<String>,
    pub memberships: CatalogMemberships,
    pub advertised_course_run: Option<CourseRunDates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub object_id: Option<String>,
    pub title: Option<String>,
    pub partner_name: Option<String>,
    pub course_count: usize,
    pub program_type: Option<String>,
    pub catalog_query_titles: Vec<String>,
    pub memberships: CatalogMemberships,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogMemberships {
    pub a_la_carte: bool,
    pub business: bool,
    pub education: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRunDates {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl CatalogRecord {
    pub fn from_hit(hit: &Value, content_type: ContentType, catalog_titles: &CatalogTitles) -> Self {
        match content_type {
            ContentType::Course => CatalogRecord::Course(CourseRecord::from_hit(hit, catalog_titles)),
            ContentType::Program => CatalogRecord::Program(ProgramRecord::from_hit(hit, catalog_titles)),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            CatalogRecord::Course(course) => course.title.as_deref(),
            CatalogRecord::Program(program) => program.title.as_deref(),
        }
    }

    pub fn partner_name(&self) -> Option<&str> {
        match self {
            CatalogRecord::Course(course) => course.partner_name.as_deref(),
            CatalogRecord::Program(program) => program.partner_name.as_deref(),
        }
    }

    pub fn memberships(&self) -> CatalogMemberships {
        match self {
            CatalogRecord::Course(course) => course.memberships,
            CatalogRecord::Program(program) => program.memberships,
        }
    }
}

impl CourseRecord {
    pub fn from_hit(hit: &Value, catalog_titles: &CatalogTitles) -> Self {
        let catalog_query_titles = string_list(hit, CATALOG_QUERY_TITLES_FACET);
        Self {
            object_id: string_field(hit, "objectID"),
            title: string_field(hit, "title"),
            partner_name: first_name(hit, "partners"),
            price: price_text(hit.get("first_enrollable_paid_seat_price")),
            memberships: CatalogMemberships::from_titles(&catalog_query_titles, catalog_titles),
            catalog_query_titles,
            advertised_course_run: hit.get("advertised_course_run").and_then(CourseRunDates::from_value),
        }
    }

    pub fn price_display(&self) -> Option<String> {
        self.price.as_ref().map(|price| format!("${price}"))
    }

    pub fn availability_display(&self) -> Option<String> {
        self.advertised_course_run.as_ref().and_then(|run| run.display())
    }
}

impl ProgramRecord {
    pub fn from_hit(hit: &Value, catalog_titles: &CatalogTitles) -> Self {
        let catalog_query_titles = string_list(hit, CATALOG_QUERY_TITLES_FACET);
        let course_count = hit
            .get("course_keys")
            .and_then(|keys| keys.as_array())
            .map(|keys| keys.len())
            .unwrap_or(0);
        Self {
            object_id: string_field(hit, "objectID"),
            title: string_field(hit, "title"),
            partner_name: first_name(hit, "authoring_organizations"),
            course_count,
            program_type: string_field(hit, "program_type"),
            memberships: CatalogMemberships::from_titles(&catalog_query_titles, catalog_titles),
            catalog_query_titles,
        }
    }

    pub fn course_count_display(&self) -> String {
        if self.course_count > 0 {
            self.course_count.to_string()
        } else {
            AVAILABLE_UPON_REQUEST.to_string()
        }
    }
}

impl CatalogMemberships {
    pub fn from_titles(record_titles: &[String], catalog_titles: &CatalogTitles) -> Self {
        let has = |title: &Option<String>| title.as_ref().is_some_and(|t| record_titles.contains(t));
        Self {
            a_la_carte: has(&catalog_titles.a_la_carte),
            business: has(&catalog_titles.business),
            education: has(&catalog_titles.education),
        }
    }

    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = Vec::new();
        if self.a_la_carte {
            badges.push("A la carte");
        }
        if self.business {
            badges.push("Business");
        }
        if self.education {
            badges.push("Education");
        }
        badges
    }
}

impl CourseRunDates {
    fn from_value(value: &Value) -> Option<Self> {
        let run = Self { start: string_field(value, "start"), end: string_field(value, "end") };
        if run.start.is_none() && run.end.is_none() {
            return None;
        }
        Some(run)
    }

    pub fn display(&self) -> Option<String> {
        let start = self.start.as_deref().map(format_date);
        let end = self.end.as_deref().map(format_date);
        match (start, end) {
            (Some(start), Some(end)) => Some(format!("{start} - {end}")),
            (Some(start), None) => Some(start),
            (None, Some(end)) => Some(end),
            (None, None) => None,
        }
    }
}

fn format_date(raw: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%b %-d, %Y").to_string();
    }
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(|s| s.to_string())
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|list| list.as_array())
        .map(|list| list.iter().filter_map(|item| item.as_str().map(|s| s.to_string())).collect())
        .unwrap_or_default()
}

fn first_name(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_array()?.first()?.get("name")?.as_str().map(|s| s.to_string())
}

// zero, empty and missing prices all mean "no price to show"
fn price_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) => {
            let price = n.as_f64()?;
            if price == 0.0 { None } else { Some(price.to_string()) }
        }
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}
