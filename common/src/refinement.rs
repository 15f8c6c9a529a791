//! Refinement state shared by every results view, and the reducer that updates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::search_const::{
    CONTENT_TYPE_REFINEMENT, ContentType, HIDE_PRICE_REFINEMENT, PAGE_REFINEMENT, QUERY_REFINEMENT,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefinementAction {
    /// Replaces every selected value of a facet.
    SetRefinement(String, Vec<String>),
    ClearRefinement(String),
    AddToRefinement(String, String),
    RemoveFromRefinement(String, String),
    ClearAll,
    SetPage(u64),
}

impl RefinementAction {
    pub fn set<V: Into<String>>(key: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self::SetRefinement(key.into(), values.into_iter().map(|v| v.into()).collect())
    }

    pub fn clear(key: impl Into<String>) -> Self {
        Self::ClearRefinement(key.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RefinementState {
    pub refinements: BTreeMap<String, Vec<String>>,
    pub page: Option<u64>,
}

impl RefinementState {
    /// Applies one action and returns the next state. Any change to the refinements
    /// themselves sends the user back to the first page.
    pub fn reduce(mut self, action: RefinementAction) -> Self {
        match action {
            RefinementAction::SetRefinement(key, values) if key == PAGE_REFINEMENT => {
                self.page = values.first().and_then(|v| v.trim().parse().ok());
            }
            RefinementAction::SetRefinement(key, values) => {
                self.refinements.insert(key, dedup_values(values));
                self.page = None;
            }
            RefinementAction::ClearRefinement(key) if key == PAGE_REFINEMENT => {
                self.page = None;
            }
            RefinementAction::ClearRefinement(key) => {
                if self.refinements.remove(&key).is_some() {
                    self.page = None;
                }
            }
            RefinementAction::AddToRefinement(key, value) => {
                let entry = self.refinements.entry(key).or_default();
                if !entry.contains(&value) {
                    entry.push(value);
                }
                self.page = None;
            }
            RefinementAction::RemoveFromRefinement(key, value) => {
                if let Some(entry) = self.refinements.get_mut(&key) {
                    entry.retain(|v| v != &value);
                    if entry.is_empty() {
                        self.refinements.remove(&key);
                    }
                    self.page = None;
                }
            }
            RefinementAction::ClearAll => {
                self = Self::default();
            }
            RefinementAction::SetPage(page) => {
                self.page = Some(page);
            }
        }
        self
    }

    pub fn values(&self, key: &str) -> &[String] {
        self.refinements.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.refinements.contains_key(key)
    }

    pub fn query_text(&self) -> &str {
        self.values(QUERY_REFINEMENT).first().map(|s| s.as_str()).unwrap_or("")
    }

    pub fn current_page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    pub fn hide_price(&self) -> bool {
        self.contains(HIDE_PRICE_REFINEMENT)
    }

    /// Content types with a visible results panel. No content type refinement means both.
    pub fn active_content_types(&self) -> Vec<ContentType> {
        let selected = self
            .values(CONTENT_TYPE_REFINEMENT)
            .iter()
            .filter_map(|v| ContentType::from_refinement_value(v))
            .collect::<Vec<_>>();
        if selected.is_empty() {
            ContentType::ALL.to_vec()
        } else {
            ContentType::ALL.into_iter().filter(|ct| selected.contains(ct)).collect()
        }
    }
}

fn dedup_values(values: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !result.contains(&value) {
            result.push(value);
        }
    }
    result
}
