//! Project details shown in the overlay, supplied by the host.

use rustc_hash::FxHashMap;

use crate::graph::PayloadRef;

/// What the overlay needs to know about one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailContent {
    /// Dropdown link targets, in display order.
    pub links: Vec<String>,
    /// Number of images in the carousel.
    pub image_count: usize,
}

/// Resolves node payloads to overlay content.
pub trait DetailSource {
    /// Content for `payload`. Unknown payloads get an empty overlay.
    fn detail(&self, payload: &PayloadRef) -> DetailContent;
}

/// In-memory [`DetailSource`].
#[derive(Debug, Clone, Default)]
pub struct StaticDetails {
    entries: FxHashMap<PayloadRef, DetailContent>,
}

impl StaticDetails {
    /// Empty table; every payload resolves to empty content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the content for `payload`.
    #[must_use]
    pub fn with(mut self, payload: impl Into<String>, content: DetailContent) -> Self {
        let _ = self.entries.insert(PayloadRef::new(payload), content);
        self
    }
}

impl DetailSource for StaticDetails {
    fn detail(&self, payload: &PayloadRef) -> DetailContent {
        self.entries.get(payload).cloned().unwrap_or_default()
    }
}
