//! Opal Element Tree
//!
//! The rendering environment the widget layer targets: a retained arena of
//! element nodes with assignable style properties, attributes, event
//! listeners, a deterministic timer scheduler, and an intersection-visibility
//! registry.
//!
//! There is no frame loop here - everything is synchronous and cooperative.
//! Deferred work (toast fade-outs, lazy-image loads) is driven explicitly via
//! [`ElementTree::advance`] and [`ElementTree::set_intersecting`].

pub mod element;
pub mod element_style;
pub mod error;
pub mod intersection;
pub mod scheduler;
pub mod tree;

pub use element::Element;
pub use element_style::*;
pub use error::LayoutError;
pub use scheduler::TimerId;
pub use tree::{bind_scheme_reflection, ElementId, ElementTree, THEME_ATTRIBUTE};

/// Commonly used types for widget construction
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::element_style::*;
    pub use crate::error::LayoutError;
    pub use crate::scheduler::TimerId;
    pub use crate::tree::{ElementId, ElementTree, THEME_ATTRIBUTE};
    pub use opal_core::events::{event_types, Event, EventData, EventType};
    pub use opal_core::{Color, Shadow};
}
