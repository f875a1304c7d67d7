//! Opal UI Components
//!
//! Themed widgets built on the element tree, all consumers of the same
//! styling contract:
//!
//! - [`styling::apply_base_styles`] translates a [`styling::StyleConfig`]
//!   into concrete style assignments, reading the theme store and the
//!   design tokens
//! - every widget builds its nodes, calls the applicator and/or tokens
//!   directly, wires a few listeners, and exposes `render`/`destroy`
//!
//! # Example
//!
//! ```rust
//! use opal_layout::ElementTree;
//! use opal_theme::ThemeState;
//! use opal_ui::prelude::*;
//!
//! ThemeState::init_default();
//! let mut tree = ElementTree::new();
//!
//! let save = button("Save").variant(ButtonVariant::Primary).build(&mut tree);
//! let root = tree.root();
//! tree.append_child(root, save.render());
//! ```

pub mod components;
pub mod form;
pub mod lazy;
pub mod styling;

mod text;

pub use components::button::{button, Button, ButtonBuilder, ButtonVariant};
pub use components::dropdown::{dropdown, Dropdown, DropdownBuilder, MenuAlign};
pub use components::error_boundary::{ErrorBoundary, RenderFailure};
pub use components::image::{image, Image, ImageBuilder};
pub use components::input::{input, Input, InputBuilder, InputType};
pub use components::loader::{loader, Loader, LoaderBuilder, LoaderKind, LoaderSize};
pub use components::navigation::{NavLink, Navigation};
pub use components::search::{SearchBar, SearchOptions};
pub use components::table::{Table, TableProps};
pub use components::toast::ToastHost;
pub use form::{validate_form, ValidationReport, ValidationRule};
pub use lazy::{lazy_load_image, DATA_SRC_ATTRIBUTE};
pub use styling::{apply_base_styles, ink_color, surface_color, Size, StyleConfig, StyleKind};

/// Commonly used types for building themed UIs
pub mod prelude {
    pub use crate::components::button::{button, Button, ButtonVariant};
    pub use crate::components::dropdown::{dropdown, Dropdown, MenuAlign};
    pub use crate::components::error_boundary::ErrorBoundary;
    pub use crate::components::image::image;
    pub use crate::components::input::{input, InputType};
    pub use crate::components::loader::{loader, LoaderKind, LoaderSize};
    pub use crate::components::navigation::{NavLink, Navigation};
    pub use crate::components::search::{SearchBar, SearchOptions};
    pub use crate::components::table::{Table, TableProps};
    pub use crate::components::toast::ToastHost;
    pub use crate::form::{validate_form, ValidationRule};
    pub use crate::styling::{apply_base_styles, Size, StyleConfig, StyleKind};
}
