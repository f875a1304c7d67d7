//! Opal Theme System
//!
//! Design tokens plus a process-wide light/dark scheme store.
//!
//! # Overview
//!
//! - **Design tokens**: immutable tables of colors, spacing, fonts,
//!   breakpoints, radii, and shadows, keyed by semantic name
//! - **Color scheme**: a single `Light`/`Dark` flag read by every styling
//!   computation; in dark mode the toolkit renders with an inverted ink
//!   palette (text in the background token color and vice versa)
//!
//! # Quick Start
//!
//! ```rust
//! use opal_theme::{ColorScheme, ColorToken, ThemeState};
//!
//! // Initialize theme at app startup
//! ThemeState::init_default();
//!
//! // Access tokens in widgets
//! let theme = ThemeState::get();
//! let primary = theme.color(ColorToken::Primary);
//! let gap = theme.spacing().sm;
//!
//! // Flip the scheme at any time; styling calls pick it up on next read
//! theme.set_scheme(ColorScheme::Dark);
//! ```
//!
//! Token tables are fixed at definition time and never mutated; the scheme
//! flag is the only mutable shared state in the crate.

pub mod scheme;
pub mod state;
pub mod tokens;

pub use scheme::ColorScheme;
pub use state::{set_scheme_callback, ThemeState};
pub use tokens::*;
