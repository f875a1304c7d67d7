//! Element tree arena
//!
//! Elements live in a slotmap; stale ids simply miss. All tree mutation
//! APIs degrade silently on missing elements (the permissive policy of the
//! styling layer), with one exception: looking up a mount container by its
//! `id` attribute fails fast with [`LayoutError::ContainerNotFound`].

use std::sync::{Arc, Mutex};

use slotmap::{new_key_type, Key, SlotMap};
use tracing::{trace, warn};

use opal_core::events::{Event, EventData, EventRegistry, EventType};
use opal_theme::{set_scheme_callback, ColorScheme, ThemeState};

use crate::element::Element;
use crate::element_style::ElementStyle;
use crate::error::LayoutError;
use crate::intersection::IntersectionRegistry;
use crate::scheduler::{Scheduler, TimerId};

new_key_type! {
    /// Arena key of an element node
    pub struct ElementId;
}

/// Root attribute reflecting the active color scheme
pub const THEME_ATTRIBUTE: &str = "data-theme";

fn raw(id: ElementId) -> u64 {
    id.data().as_ffi()
}

/// A retained tree of styled element nodes
///
/// Owns the event registry, the timer scheduler, and the intersection
/// registry so that deferred callbacks can mutate the tree they belong to.
pub struct ElementTree {
    nodes: SlotMap<ElementId, Element>,
    root: ElementId,
    events: EventRegistry<ElementTree>,
    scheduler: Scheduler<ElementTree>,
    intersection: IntersectionRegistry<ElementTree>,
    intersection_supported: bool,
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree {
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Element::new("root"));
        let mut tree = Self {
            nodes,
            root,
            events: EventRegistry::new(),
            scheduler: Scheduler::new(),
            intersection: IntersectionRegistry::new(),
            intersection_supported: true,
        };
        tree.sync_scheme_attribute();
        tree
    }

    /// The always-present root element
    pub fn root(&self) -> ElementId {
        self.root
    }

    // ========== Structure ==========

    /// Create a detached element
    pub fn create_element(&mut self, tag: impl Into<String>) -> ElementId {
        self.nodes.insert(Element::new(tag))
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.attach(parent, child, None);
    }

    /// Insert `child` as the first child of `parent`
    pub fn prepend_child(&mut self, parent: ElementId, child: ElementId) {
        self.attach(parent, child, Some(0));
    }

    fn attach(&mut self, parent: ElementId, child: ElementId, index: Option<usize>) {
        if parent == child || !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            warn!(target: "opal_layout::tree", "attach on missing or self element ignored");
            return;
        }
        self.detach(child);
        if let Some(el) = self.nodes.get_mut(child) {
            el.parent = Some(parent);
        }
        if let Some(el) = self.nodes.get_mut(parent) {
            match index {
                Some(i) => el.children.insert(i.min(el.children.len()), child),
                None => el.children.push(child),
            }
        }
    }

    /// Detach an element from its parent without destroying it
    pub fn detach(&mut self, child: ElementId) {
        let Some(parent) = self.nodes.get(child).and_then(|el| el.parent) else {
            return;
        };
        if let Some(el) = self.nodes.get_mut(parent) {
            el.children.retain(|&c| c != child);
        }
        if let Some(el) = self.nodes.get_mut(child) {
            el.parent = None;
        }
    }

    /// Remove an element and its subtree, dropping listeners and watches
    pub fn remove(&mut self, id: ElementId) {
        if id == self.root {
            warn!(target: "opal_layout::tree", "refusing to remove the root element");
            return;
        }
        if !self.nodes.contains_key(id) {
            return;
        }
        self.detach(id);
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(el) = self.nodes.remove(current) {
                stack.extend(el.children);
            }
            self.events.remove_target(raw(current));
            self.intersection.unobserve(raw(current));
        }
    }

    /// Remove every child subtree of an element
    pub fn clear_children(&mut self, id: ElementId) {
        let children: Vec<ElementId> = self
            .nodes
            .get(id)
            .map(|el| el.children.clone())
            .unwrap_or_default();
        for child in children {
            self.remove(child);
        }
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id).and_then(|el| el.parent)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes
            .get(id)
            .map(|el| el.children.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of elements, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========== Content and attributes ==========

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(el) = self.nodes.get_mut(id) {
            el.set_text(text);
        }
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.nodes.get(id).and_then(|el| el.text())
    }

    pub fn set_attribute(&mut self, id: ElementId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(el) = self.nodes.get_mut(id) {
            el.set_attribute(name, value);
        }
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|el| el.attribute(name))
    }

    pub fn remove_attribute(&mut self, id: ElementId, name: &str) {
        if let Some(el) = self.nodes.get_mut(id) {
            el.remove_attribute(name);
        }
    }

    // ========== Style ==========

    pub fn style(&self, id: ElementId) -> Option<&ElementStyle> {
        self.nodes.get(id).map(|el| &el.style)
    }

    /// Mutate an element's style in place; a no-op when the element is gone
    pub fn update_style<F>(&mut self, id: ElementId, update: F)
    where
        F: FnOnce(&mut ElementStyle),
    {
        if let Some(el) = self.nodes.get_mut(id) {
            update(&mut el.style);
        }
    }

    // ========== Lookup ==========

    /// Find an element by its `id` attribute
    pub fn element_by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .find(|(_, el)| el.attribute("id") == Some(dom_id))
            .map(|(id, _)| id)
    }

    /// Find a mount container by its `id` attribute, failing fast
    pub fn require_element(&self, dom_id: &str) -> Result<ElementId, LayoutError> {
        self.element_by_id(dom_id)
            .ok_or_else(|| LayoutError::ContainerNotFound {
                id: dom_id.to_string(),
            })
    }

    // ========== Events ==========

    /// Register an event listener on an element
    pub fn add_listener<F>(&mut self, id: ElementId, event_type: EventType, handler: F)
    where
        F: FnMut(&mut ElementTree, &mut Event) + Send + 'static,
    {
        self.events.register(raw(id), event_type, handler);
    }

    /// Number of listeners registered for an element and event type
    pub fn listener_count(&self, id: ElementId, event_type: EventType) -> usize {
        self.events.handler_count(raw(id), event_type)
    }

    /// Dispatch an event to an element's listeners synchronously
    ///
    /// Returns true when at least one listener was invoked. Listeners run to
    /// completion before this returns; listeners registered during dispatch
    /// receive only later events.
    pub fn dispatch(&mut self, id: ElementId, event_type: EventType, data: EventData) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        let Some(mut handlers) = self.events.take(raw(id), event_type) else {
            return false;
        };
        let mut event = Event::new(event_type, raw(id), data);
        event.timestamp = self.scheduler.now_ms();
        trace!(target: "opal_layout::tree", ?event_type, handlers = handlers.len(), "dispatch");
        for handler in handlers.iter_mut() {
            if event.propagation_stopped {
                break;
            }
            handler(self, &mut event);
        }
        // A listener may have removed the target; its handlers go with it.
        if self.nodes.contains_key(id) {
            self.events.merge(raw(id), event_type, handlers);
        }
        true
    }

    // ========== Timers ==========

    /// Queue a deferred callback `delay_ms` from the current logical time
    pub fn schedule<F>(&mut self, delay_ms: u64, callback: F) -> TimerId
    where
        F: FnOnce(&mut ElementTree) + Send + 'static,
    {
        self.scheduler.schedule(delay_ms, callback)
    }

    pub fn cancel_timer(&mut self, timer: TimerId) -> bool {
        self.scheduler.cancel(timer)
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Advance the logical clock, firing every timer that comes due
    ///
    /// Timers scheduled by firing callbacks run in the same window when
    /// their deadline falls within it.
    pub fn advance(&mut self, ms: u64) {
        let target = self.scheduler.now_ms() + ms;
        while let Some(callback) = self.scheduler.pop_due(target) {
            callback(self);
        }
        self.scheduler.finish(target);
    }

    // ========== Intersection observation ==========

    /// Whether the environment provides visibility observation
    pub fn intersection_supported(&self) -> bool {
        self.intersection_supported
    }

    pub fn set_intersection_supported(&mut self, supported: bool) {
        self.intersection_supported = supported;
    }

    /// Register one-shot interest in an element's visibility
    pub fn observe_visibility<F>(&mut self, id: ElementId, root_margin: f32, callback: F)
    where
        F: FnOnce(&mut ElementTree) + Send + 'static,
    {
        if !self.nodes.contains_key(id) {
            warn!(target: "opal_layout::tree", "observe_visibility on missing element ignored");
            return;
        }
        self.intersection.observe(raw(id), root_margin, callback);
    }

    /// Drop a pending visibility watch
    pub fn unobserve_visibility(&mut self, id: ElementId) -> bool {
        self.intersection.unobserve(raw(id))
    }

    pub fn is_observed(&self, id: ElementId) -> bool {
        self.intersection.is_observed(raw(id))
    }

    pub fn observation_margin(&self, id: ElementId) -> Option<f32> {
        self.intersection.root_margin(raw(id))
    }

    /// Report that an element became visible, consuming its watch
    pub fn set_intersecting(&mut self, id: ElementId) {
        if let Some(callback) = self.intersection.take(raw(id)) {
            callback(self);
        }
    }

    // ========== Theme reflection ==========

    /// Write the active color scheme onto the root `data-theme` attribute
    pub fn sync_scheme_attribute(&mut self) {
        if let Some(theme) = ThemeState::try_get() {
            let scheme = theme.scheme();
            self.set_attribute(self.root, THEME_ATTRIBUTE, scheme.as_str());
        }
    }
}

/// Reflect every future scheme change onto the tree's root attribute
///
/// Registers the process-wide scheme callback; the last bound tree wins.
pub fn bind_scheme_reflection(tree: &Arc<Mutex<ElementTree>>) {
    let tree = Arc::clone(tree);
    set_scheme_callback(move |scheme: ColorScheme| {
        if let Ok(mut tree) = tree.lock() {
            let root = tree.root();
            tree.set_attribute(root, THEME_ATTRIBUTE, scheme.as_str());
        }
    });
}
