//! The toast bus
//!
//! Subscription state machine: unsubscribed -> subscribed -> unsubscribed.
//! A callback receives every toast shown while it is subscribed and none
//! outside that window. Fan-out is synchronous: all subscribers present at
//! the start of `show` run to completion before `show` returns.

use std::sync::{Arc, Mutex, OnceLock};

use tracing::{debug, trace};
use uuid::Uuid;

use crate::toast::{Toast, ToastKind, ToastRequest, DEFAULT_TOAST_DURATION_MS};

/// Handle returned by `subscribe`; unsubscribing twice is a safe no-op
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Toast id generator
///
/// Injectable so tests can pin deterministic ids; the default fabricates
/// random UUIDs.
pub type IdSource = Box<dyn Fn() -> String + Send + Sync>;

type Listener = Arc<dyn Fn(&Toast) + Send + Sync>;

struct Registry {
    subscribers: Vec<(u64, Listener)>,
    next_subscriber: u64,
}

/// In-process toast publish/subscribe register
pub struct ToastBus {
    registry: Mutex<Registry>,
    id_source: IdSource,
}

impl Default for ToastBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastBus {
    /// Create a bus with random UUID toast ids
    pub fn new() -> Self {
        Self::with_id_source(Box::new(|| Uuid::new_v4().to_string()))
    }

    /// Create a bus with a custom toast id generator
    pub fn with_id_source(id_source: IdSource) -> Self {
        Self {
            registry: Mutex::new(Registry {
                subscribers: Vec::new(),
                next_subscriber: 0,
            }),
            id_source,
        }
    }

    /// Register a callback for every future toast
    pub fn subscribe<F>(&self, listener: F) -> SubscriberId
    where
        F: Fn(&Toast) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock().unwrap();
        let id = registry.next_subscriber;
        registry.next_subscriber += 1;
        registry.subscribers.push((id, Arc::new(listener)));
        trace!(target: "opal_notify::bus", subscriber = id, "subscribed");
        SubscriberId(id)
    }

    /// Remove exactly the given subscription
    ///
    /// Returns false when it was already removed; calling twice is safe.
    pub fn unsubscribe(&self, subscriber: SubscriberId) -> bool {
        let mut registry = self.registry.lock().unwrap();
        let before = registry.subscribers.len();
        registry.subscribers.retain(|(id, _)| *id != subscriber.0);
        let removed = registry.subscribers.len() != before;
        if removed {
            trace!(target: "opal_notify::bus", subscriber = subscriber.0, "unsubscribed");
        }
        removed
    }

    /// Number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.registry.lock().unwrap().subscribers.len()
    }

    /// Fabricate a toast id, build the record, and fan it out synchronously
    ///
    /// With zero subscribers the toast is dropped - there is no buffering
    /// and at most one delivery per subscriber. Returns the broadcast
    /// record.
    pub fn show(&self, request: ToastRequest) -> Toast {
        let toast = Toast {
            id: (self.id_source)(),
            kind: request.kind,
            message: request.message,
            duration_ms: request.duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
        };

        // Snapshot under the lock, invoke outside it, so listeners may
        // subscribe or unsubscribe reentrantly without deadlocking.
        let listeners: Vec<Listener> = {
            let registry = self.registry.lock().unwrap();
            registry
                .subscribers
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect()
        };

        if listeners.is_empty() {
            debug!(target: "opal_notify::bus", id = %toast.id, "toast dropped, no subscribers");
            return toast;
        }

        debug!(
            target: "opal_notify::bus",
            id = %toast.id,
            kind = ?toast.kind,
            subscribers = listeners.len(),
            "fan-out"
        );
        for listener in &listeners {
            listener(&toast);
        }
        toast
    }

    /// Show a success toast with the default duration
    pub fn success(&self, message: impl Into<String>) -> Toast {
        self.show(ToastRequest::new(ToastKind::Success, message))
    }

    /// Show an error toast with the default duration
    pub fn error(&self, message: impl Into<String>) -> Toast {
        self.show(ToastRequest::new(ToastKind::Error, message))
    }

    /// Show an info toast with the default duration
    pub fn info(&self, message: impl Into<String>) -> Toast {
        self.show(ToastRequest::new(ToastKind::Info, message))
    }
}

/// Global bus instance
static TOAST_BUS: OnceLock<ToastBus> = OnceLock::new();

/// Get the process-wide toast bus
pub fn toasts() -> &'static ToastBus {
    TOAST_BUS.get_or_init(ToastBus::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn counting_bus() -> ToastBus {
        let counter = AtomicU64::new(0);
        ToastBus::with_id_source(Box::new(move || {
            format!("toast-{}", counter.fetch_add(1, Ordering::SeqCst))
        }))
    }

    #[test]
    fn test_fan_out_reaches_every_subscriber_once() {
        let bus = counting_bus();
        let received: Arc<Mutex<Vec<(usize, Toast)>>> = Arc::new(Mutex::new(Vec::new()));
        for n in 0..3 {
            let sink = Arc::clone(&received);
            bus.subscribe(move |toast| sink.lock().unwrap().push((n, toast.clone())));
        }

        bus.show(ToastRequest::new(ToastKind::Success, "done"));

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 3);
        let mut seen: Vec<usize> = received.iter().map(|(n, _)| *n).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
        for (_, toast) in received.iter() {
            assert_eq!(toast.message, "done");
            assert_eq!(toast.kind, ToastKind::Success);
            assert_eq!(toast.duration_ms, 3000);
            assert!(!toast.id.is_empty());
        }
    }

    #[test]
    fn test_ids_are_unique_per_show() {
        let bus = ToastBus::new();
        let a = bus.info("first");
        let b = bus.info("second");
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_injectable_id_source_is_deterministic() {
        let bus = counting_bus();
        assert_eq!(bus.info("one").id, "toast-0");
        assert_eq!(bus.info("two").id, "toast-1");
    }

    #[test]
    fn test_unsubscribed_callback_never_fires_again() {
        let bus = counting_bus();
        let count = Arc::new(AtomicU64::new(0));
        let sink = Arc::clone(&count);
        let subscription = bus.subscribe(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        bus.info("before");
        assert!(bus.unsubscribe(subscription));
        bus.info("after");
        // Down to zero subscribers, show is a silent drop.
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let bus = counting_bus();
        let subscription = bus.subscribe(|_| {});
        assert!(bus.unsubscribe(subscription));
        assert!(!bus.unsubscribe(subscription));
    }

    #[test]
    fn test_unsubscribe_removes_exactly_one() {
        let bus = counting_bus();
        let hits: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
        let a_sink = Arc::clone(&hits);
        let a = bus.subscribe(move |_| a_sink.lock().unwrap().push("a"));
        let b_sink = Arc::clone(&hits);
        let _b = bus.subscribe(move |_| b_sink.lock().unwrap().push("b"));

        bus.unsubscribe(a);
        bus.info("ping");
        assert_eq!(hits.lock().unwrap().as_slice(), &["b"]);
    }

    #[test]
    fn test_duration_override() {
        let bus = counting_bus();
        let toast = bus.show(ToastRequest::new(ToastKind::Info, "quick").duration_ms(500));
        assert_eq!(toast.duration_ms, 500);
    }

    #[test]
    fn test_reentrant_unsubscribe_does_not_deadlock() {
        let bus = Arc::new(counting_bus());
        let handle: Arc<Mutex<Option<SubscriberId>>> = Arc::new(Mutex::new(None));
        let bus_ref = Arc::clone(&bus);
        let handle_ref = Arc::clone(&handle);
        let id = bus.subscribe(move |_| {
            if let Some(id) = handle_ref.lock().unwrap().take() {
                bus_ref.unsubscribe(id);
            }
        });
        *handle.lock().unwrap() = Some(id);

        bus.info("self-removing");
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_global_bus_is_shared() {
        assert!(std::ptr::eq(toasts(), toasts()));
    }
}
