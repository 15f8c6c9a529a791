//! The single source of truth for refinements on a catalog search page.

use common::{
    refinement::{RefinementAction, RefinementState},
    url_param::{StateParseError, UrlParam},
};

pub type SubscriberId = u64;

type Subscriber = Box<dyn FnMut(&RefinementState)>;

/// Holds the refinement state and tells every subscriber about each dispatch.
///
/// Consumers never mutate the state directly: they read [`RefinementStore::state`] or take a
/// [`RefinementStore::snapshot`], and go through [`RefinementStore::dispatch`] to change it.
#[derive(Default)]
pub struct RefinementStore {
    state: RefinementState,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber_id: SubscriberId,
}

impl std::fmt::Debug for RefinementStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefinementStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl RefinementStore {
    pub fn new(state: RefinementState) -> Self {
        Self { state, ..Self::default() }
    }

    /// Restores the store from the URL path segment produced by [`RefinementStore::url_param`].
    pub fn from_url_param(param: &str) -> Result<Self, StateParseError> {
        let UrlParam(state) = param.parse::<UrlParam<RefinementState>>()?;
        Ok(Self::new(state))
    }

    pub fn url_param(&self) -> String {
        UrlParam(self.state.clone()).to_string()
    }

    pub fn state(&self) -> &RefinementState {
        &self.state
    }

    pub fn snapshot(&self) -> RefinementState {
        self.state.clone()
    }

    pub fn dispatch(&mut self, action: RefinementAction) -> &RefinementState {
        tracing::debug!(?action, "dispatching refinement action");
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
        for (_id, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&RefinementState) + 'static) -> SubscriberId {
        let id = self.next_subscriber_id;
        self.next_subscriber_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscriber_id, _)| *subscriber_id != id);
        self.subscribers.len() != before
    }
}
