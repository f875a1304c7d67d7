//! Opal Core Primitives
//!
//! This crate provides the foundational value types for the Opal UI toolkit:
//!
//! - **Colors**: RGBA color values with hex parsing/formatting and lerp
//! - **Shadows**: box-shadow definitions shared by tokens and element styles
//! - **Event Dispatch**: event types and a per-target handler registry
//! - **Numeric helpers**: `clamp` and `round_to`
//!
//! # Example
//!
//! ```rust
//! use opal_core::Color;
//!
//! let primary = Color::from_hex(0x3B82F6);
//! let faded = primary.with_alpha(0.1);
//! assert_eq!(primary.to_hex_string(), "#3b82f6");
//! assert!(faded.a < 1.0);
//! ```

pub mod color;
pub mod events;
pub mod num;
pub mod shadow;

pub use color::{Color, ColorParseError};
pub use events::{Event, EventData, EventRegistry, EventType};
pub use num::{clamp, round_to};
pub use shadow::Shadow;
