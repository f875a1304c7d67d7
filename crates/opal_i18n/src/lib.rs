//! Opal internationalization (i18n)
//!
//! A small locale registry with dotted-path lookup:
//!
//! - Locales are registered as JSON-like translation trees
//! - Switching to an unregistered locale fails fast
//! - Lookup misses degrade to the requested path, never to an error
//!
//! # Example
//!
//! ```rust
//! use opal_i18n::{t, t_args, I18nState};
//! use serde_json::json;
//!
//! I18nState::init("en");
//! let state = I18nState::get();
//! state.register_locale("en", json!({
//!     "nav": { "greeting": "Hello, {{name}}!" }
//! }));
//!
//! assert_eq!(t_args("nav.greeting", &[("name", "Ada")]), "Hello, Ada!");
//! assert_eq!(t("nav.missing"), "nav.missing");
//! ```

mod error;
mod state;

pub use error::I18nError;
pub use state::I18nState;

/// Translate a dotted path using the global [`I18nState`]
///
/// If the state isn't initialized, the path itself is returned.
pub fn t(path: &str) -> String {
    t_args(path, &[])
}

/// Translate a dotted path with `{{name}}` interpolation arguments
pub fn t_args(path: &str, args: &[(&str, &str)]) -> String {
    match I18nState::try_get() {
        Some(state) => state.translate(path, args),
        None => path.to_string(),
    }
}
