pub mod empty_state;
pub mod refinement_store;
