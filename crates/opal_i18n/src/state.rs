//! Global i18n state singleton

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use serde_json::Value;
use tracing::debug;

use crate::I18nError;

/// Global i18n singleton
static I18N_STATE: OnceLock<I18nState> = OnceLock::new();

/// Runtime i18n state: the active language plus registered catalogs
pub struct I18nState {
    language: RwLock<String>,
    catalogs: RwLock<HashMap<String, Value>>,
}

impl I18nState {
    /// Initialize the global i18n state
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(language: impl Into<String>) {
        let state = I18nState {
            language: RwLock::new(language.into()),
            catalogs: RwLock::new(HashMap::new()),
        };
        let _ = I18N_STATE.set(state);
    }

    /// Get the global i18n state instance
    ///
    /// # Panics
    ///
    /// Panics if `init()` has not been called.
    pub fn get() -> &'static I18nState {
        I18N_STATE
            .get()
            .expect("I18nState not initialized. Call I18nState::init() at app startup.")
    }

    /// Try to get the global i18n state (returns None if not initialized)
    pub fn try_get() -> Option<&'static I18nState> {
        I18N_STATE.get()
    }

    /// The active language code
    pub fn language(&self) -> String {
        self.language.read().unwrap().clone()
    }

    /// Register (or replace) a locale's translation tree
    pub fn register_locale(&self, language: impl Into<String>, tree: Value) {
        let language = language.into();
        debug!(target: "opal_i18n", %language, "register locale");
        self.catalogs.write().unwrap().insert(language, tree);
    }

    /// Switch the active language; unregistered locales fail fast
    pub fn set_language(&self, language: impl Into<String>) -> Result<(), I18nError> {
        let language = language.into();
        if !self.catalogs.read().unwrap().contains_key(&language) {
            return Err(I18nError::LocaleNotRegistered(language));
        }
        *self.language.write().unwrap() = language;
        Ok(())
    }

    /// Translate a dotted path with `{{name}}` interpolation arguments
    ///
    /// Any miss - unregistered active locale, missing branch, non-string
    /// leaf - returns the path itself.
    pub fn translate(&self, path: &str, args: &[(&str, &str)]) -> String {
        let catalogs = self.catalogs.read().unwrap();
        let Some(mut node) = catalogs.get(&self.language()) else {
            return path.to_string();
        };
        for key in path.split('.') {
            match node.get(key) {
                Some(child) => node = child,
                None => return path.to_string(),
            }
        }
        let Some(text) = node.as_str() else {
            return path.to_string();
        };
        let mut result = text.to_string();
        for (name, value) in args {
            result = result.replace(&format!("{{{{{name}}}}}"), value);
        }
        result
    }
}
