//! Catalog radio selection.

use common::{
    refinement::{RefinementAction, RefinementState},
    search_const::QUERY_UUID_REFINEMENT,
};

pub fn is_catalog_selected(state: &RefinementState, query_uuid: &str) -> bool {
    state.values(QUERY_UUID_REFINEMENT).iter().any(|uuid| uuid == query_uuid)
}

/// Selecting a catalog replaces any previous choice. Re-selecting the current one does nothing.
pub fn select_catalog_action(state: &RefinementState, query_uuid: &str) -> Option<RefinementAction> {
    if is_catalog_selected(state, query_uuid) {
        return None;
    }
    Some(RefinementAction::set(QUERY_UUID_REFINEMENT, [query_uuid]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_exclusive() {
        let state = RefinementState::default();
        let action = select_catalog_action(&state, "uuid-a").unwrap();
        let state = state.reduce(action);
        assert!(is_catalog_selected(&state, "uuid-a"));
        assert_eq!(select_catalog_action(&state, "uuid-a"), None);

        let action = select_catalog_action(&state, "uuid-b").unwrap();
        let state = state.reduce(action);
        assert!(!is_catalog_selected(&state, "uuid-a"));
        assert_eq!(state.values(QUERY_UUID_REFINEMENT), ["uuid-b".to_string()]);
    }
}
