//! Intersection-visibility registry
//!
//! One-shot interest registration: a consumer observes an element, and the
//! first visibility notification consumes the watch. There is no geometry
//! engine here - the host (or a test) reports visibility explicitly through
//! [`ElementTree::set_intersecting`](crate::tree::ElementTree::set_intersecting).

use rustc_hash::FxHashMap;

type Callback<Ctx> = Box<dyn FnOnce(&mut Ctx) + Send>;

struct Watch<Ctx> {
    root_margin: f32,
    callback: Callback<Ctx>,
}

/// Registry of pending visibility watches keyed by raw element id
pub struct IntersectionRegistry<Ctx> {
    entries: FxHashMap<u64, Watch<Ctx>>,
}

impl<Ctx> Default for IntersectionRegistry<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> IntersectionRegistry<Ctx> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Register interest in an element's visibility
    ///
    /// A second observe for the same element replaces the first.
    pub fn observe<F>(&mut self, target: u64, root_margin: f32, callback: F)
    where
        F: FnOnce(&mut Ctx) + Send + 'static,
    {
        self.entries.insert(
            target,
            Watch {
                root_margin,
                callback: Box::new(callback),
            },
        );
    }

    /// Drop a watch without firing it; returns false if none existed
    pub fn unobserve(&mut self, target: u64) -> bool {
        self.entries.remove(&target).is_some()
    }

    pub fn is_observed(&self, target: u64) -> bool {
        self.entries.contains_key(&target)
    }

    /// Margin the watch was registered with (px)
    pub fn root_margin(&self, target: u64) -> Option<f32> {
        self.entries.get(&target).map(|w| w.root_margin)
    }

    /// Consume the watch for a now-visible element
    pub fn take(&mut self, target: u64) -> Option<Callback<Ctx>> {
        self.entries.remove(&target).map(|w| w.callback)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
