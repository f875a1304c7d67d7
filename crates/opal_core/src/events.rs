//! Event dispatch system
//!
//! Events are identified by a numeric type and a target id. Handlers are
//! registered per `(target, event_type)` pair in an [`EventRegistry`]; the
//! registry is generic over the context handed to handlers so that the
//! element-tree layer can pass itself in mutably during dispatch.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const CLICK: EventType = 1;
    pub const POINTER_ENTER: EventType = 2;
    pub const POINTER_LEAVE: EventType = 3;
    pub const POINTER_DOWN: EventType = 4;
    pub const POINTER_UP: EventType = 5;

    pub const INPUT: EventType = 10;
    pub const FOCUS: EventType = 11;
    pub const BLUR: EventType = 12;

    pub const KEY_DOWN: EventType = 20;

    // Resource lifecycle events
    pub const LOAD: EventType = 30;
    pub const ERROR: EventType = 31;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Raw id of the target element
    pub target: u64,
    pub data: EventData,
    pub timestamp: u64,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug, Default)]
pub enum EventData {
    #[default]
    None,
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    /// Current value of a text-entry element
    Input {
        value: String,
    },
    Key {
        code: u32,
    },
}

impl Event {
    pub fn new(event_type: EventType, target: u64, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            timestamp: 0,
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Event handler function type
pub type Handler<Ctx> = Box<dyn FnMut(&mut Ctx, &mut Event) + Send>;

type HandlerList<Ctx> = SmallVec<[Handler<Ctx>; 2]>;

/// Per-target handler registry
///
/// Dispatch itself lives with the owner of the context: the owner takes the
/// handler list for a key, invokes each handler with `&mut Ctx`, and merges
/// the list back so that handlers registered during dispatch are kept.
pub struct EventRegistry<Ctx> {
    handlers: FxHashMap<(u64, EventType), HandlerList<Ctx>>,
}

impl<Ctx> Default for EventRegistry<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> EventRegistry<Ctx> {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register an event handler for a target and event type
    pub fn register<F>(&mut self, target: u64, event_type: EventType, handler: F)
    where
        F: FnMut(&mut Ctx, &mut Event) + Send + 'static,
    {
        tracing::trace!(target: "opal_core::events", id = target, event_type, "register handler");
        self.handlers
            .entry((target, event_type))
            .or_default()
            .push(Box::new(handler));
    }

    /// Drop every handler registered for a target
    pub fn remove_target(&mut self, target: u64) {
        self.handlers.retain(|(id, _), _| *id != target);
    }

    /// Number of handlers registered for a target and event type
    pub fn handler_count(&self, target: u64, event_type: EventType) -> usize {
        self.handlers
            .get(&(target, event_type))
            .map(|list| list.len())
            .unwrap_or(0)
    }

    /// Take the handler list for a key (used during dispatch)
    pub fn take(&mut self, target: u64, event_type: EventType) -> Option<HandlerList<Ctx>> {
        self.handlers.remove(&(target, event_type))
    }

    /// Put a taken handler list back, keeping handlers registered meanwhile
    pub fn merge(&mut self, target: u64, event_type: EventType, mut taken: HandlerList<Ctx>) {
        if let Some(added) = self.handlers.remove(&(target, event_type)) {
            taken.extend(added);
        }
        self.handlers.insert((target, event_type), taken);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_count() {
        let mut registry: EventRegistry<Vec<u32>> = EventRegistry::new();
        registry.register(1, event_types::CLICK, |log, ev| {
            log.push(ev.event_type);
        });
        registry.register(1, event_types::CLICK, |log, ev| {
            log.push(ev.event_type + 100);
        });
        assert_eq!(registry.handler_count(1, event_types::CLICK), 2);
        assert_eq!(registry.handler_count(2, event_types::CLICK), 0);
    }

    #[test]
    fn test_take_and_merge_keeps_new_handlers() {
        let mut registry: EventRegistry<Vec<u32>> = EventRegistry::new();
        registry.register(1, event_types::CLICK, |_, _| {});
        let taken = registry.take(1, event_types::CLICK).unwrap();
        // A handler registered while the list is out must survive the merge.
        registry.register(1, event_types::CLICK, |_, _| {});
        registry.merge(1, event_types::CLICK, taken);
        assert_eq!(registry.handler_count(1, event_types::CLICK), 2);
    }

    #[test]
    fn test_remove_target_clears_all_types() {
        let mut registry: EventRegistry<()> = EventRegistry::new();
        registry.register(7, event_types::CLICK, |_, _| {});
        registry.register(7, event_types::INPUT, |_, _| {});
        registry.register(8, event_types::CLICK, |_, _| {});
        registry.remove_target(7);
        assert_eq!(registry.handler_count(7, event_types::CLICK), 0);
        assert_eq!(registry.handler_count(7, event_types::INPUT), 0);
        assert_eq!(registry.handler_count(8, event_types::CLICK), 1);
    }
}
