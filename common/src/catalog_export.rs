//! Catalog workbook export requests.

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{search_const::CATALOG_WORKBOOK_PATH, search_query::SearchQuery};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub base_url: String,
    pub facet_filters: BTreeMap<String, Vec<String>>,
    pub query: Option<String>,
}

impl ExportRequest {
    /// Export of exactly the filters and text that produced a result set.
    pub fn from_search_query(base_url: impl Into<String>, query: &SearchQuery) -> Self {
        let text = query.query_string.trim();
        Self {
            base_url: base_url.into(),
            facet_filters: query.facet_filters.clone(),
            query: (!text.is_empty()).then(|| query.query_string.clone()),
        }
    }

    /// Unencoded `(key, value)` pairs in the order they appear in the URL.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = self
            .facet_filters
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key.as_str(), value.as_str())))
            .collect::<Vec<_>>();
        if let Some(query) = &self.query {
            pairs.push(("query", query.as_str()));
        }
        pairs
    }

    pub fn to_url(&self) -> String {
        let params = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let base_url = self.base_url.trim_end_matches('/');
        if params.is_empty() {
            format!("{base_url}{CATALOG_WORKBOOK_PATH}")
        } else {
            format!("{base_url}{CATALOG_WORKBOOK_PATH}?{params}")
        }
    }
}

impl Display for ExportRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_with(text: &str, facets: Vec<(&str, Vec<&str>)>) -> SearchQuery {
        SearchQuery {
            query_string: text.to_string(),
            facet_filters: facets
                .into_iter()
                .map(|(key, values)| (key.to_string(), values.into_iter().map(|v| v.to_string()).collect()))
                .collect(),
            ..SearchQuery::default()
        }
    }

    fn decoded_query_param(url: &str) -> String {
        let (_, params) = url.split_once('?').unwrap();
        let raw = params
            .split('&')
            .find_map(|pair| pair.strip_prefix("query="))
            .unwrap();
        urlencoding::decode(raw).unwrap().into_owned()
    }

    #[test]
    fn encodes_facets_and_text_query() {
        let query = query_with("math & science", vec![("availability", vec!["Available Now", "Upcoming"])]);
        let export = ExportRequest::from_search_query("foobar.com", &query);
        assert_eq!(
            export.to_url(),
            "foobar.com/api/v1/enterprise-catalogs/catalog_workbook?availability=Available%20Now&availability=Upcoming&query=math%20%26%20science"
        );
    }

    #[test]
    fn reserved_characters_round_trip() {
        for text in ["math & science", "100% online", "a=b&c", "plus+sign", "über kurs"] {
            let export = ExportRequest::from_search_query("https://catalog.example.com/", &query_with(text, vec![]));
            let url = export.to_url();
            assert!(url.starts_with("https://catalog.example.com/api/v1/"));
            let (_, params) = url.split_once('?').unwrap();
            assert_eq!(params.matches('&').count(), 0, "unescaped delimiter in {params}");
            assert_eq!(decoded_query_param(&url), text);
        }
    }

    #[test]
    fn facets_are_ordered_by_key_and_keep_value_order() {
        let query = query_with(
            "foo",
            vec![
                ("skill_names", vec!["Research"]),
                ("availability", vec!["Upcoming", "Available Now"]),
                ("partners.name", vec!["Australian National University"]),
            ],
        );
        let export = ExportRequest::from_search_query("base", &query);
        assert_eq!(
            export.query_pairs(),
            vec![
                ("availability", "Upcoming"),
                ("availability", "Available Now"),
                ("partners.name", "Australian National University"),
                ("skill_names", "Research"),
                ("query", "foo"),
            ]
        );
    }

    #[test]
    fn blank_text_query_is_omitted() {
        let export = ExportRequest::from_search_query("base", &query_with("  ", vec![]));
        assert_eq!(export.query, None);
        assert_eq!(export.to_string(), "base/api/v1/enterprise-catalogs/catalog_workbook");
    }
}
