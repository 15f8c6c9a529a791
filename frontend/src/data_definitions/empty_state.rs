//! Upward reporting of "nothing found" per content type.

use std::collections::BTreeMap;

use common::search_const::ContentType;

/// Calls `on_change` only when the empty flag of a content type actually flips.
/// Every flag starts out `false`.
pub struct EmptyStateReporter {
    flags: BTreeMap<ContentType, bool>,
    on_change: Box<dyn FnMut(ContentType, bool)>,
}

impl EmptyStateReporter {
    pub fn new(on_change: impl FnMut(ContentType, bool) + 'static) -> Self {
        Self { flags: BTreeMap::new(), on_change: Box::new(on_change) }
    }

    pub fn is_empty(&self, content_type: ContentType) -> bool {
        self.flags.get(&content_type).copied().unwrap_or(false)
    }

    pub fn report(&mut self, content_type: ContentType, is_empty: bool) -> bool {
        if self.is_empty(content_type) == is_empty {
            return false;
        }
        self.flags.insert(content_type, is_empty);
        tracing::debug!(%content_type, is_empty, "empty state changed");
        (self.on_change)(content_type, is_empty);
        true
    }

    pub fn reset(&mut self, content_type: ContentType) -> bool {
        self.report(content_type, false)
    }
}
