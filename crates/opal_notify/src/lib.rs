//! Opal Toast Notification Bus
//!
//! An in-process publish/subscribe register: producers call
//! [`ToastBus::show`], which fabricates a unique toast id and synchronously
//! fans the record out to every subscribed renderer. There is no buffering
//! and no replay - a toast shown with zero subscribers is silently dropped.
//!
//! # Example
//!
//! ```rust
//! use opal_notify::{ToastBus, ToastKind, ToastRequest};
//!
//! let bus = ToastBus::new();
//! let subscription = bus.subscribe(|toast| {
//!     println!("{}: {}", toast.id, toast.message);
//! });
//!
//! let shown = bus.show(ToastRequest::new(ToastKind::Success, "saved"));
//! assert_eq!(shown.duration_ms, 3000);
//!
//! bus.unsubscribe(subscription);
//! ```
//!
//! A process-wide bus is available through [`toasts`] for the common case
//! of one renderer and many producers.

mod bus;
mod toast;

pub use bus::{toasts, IdSource, SubscriberId, ToastBus};
pub use toast::{Toast, ToastKind, ToastRequest, DEFAULT_TOAST_DURATION_MS};
