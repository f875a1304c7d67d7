//! Widget components
//!
//! Thin consumers of the styling pipeline: each builds one or more
//! elements, applies base styles and/or tokens directly, wires a few
//! listeners, and exposes a `render`/`destroy` lifecycle. Widgets that
//! mount into an existing container look it up by id and fail fast when it
//! does not exist.

pub mod button;
pub mod dropdown;
pub mod error_boundary;
pub mod image;
pub mod input;
pub mod loader;
pub mod navigation;
pub mod search;
pub mod table;
pub mod toast;
