//! Localized default labels
//!
//! Widgets ship English fallback copy; when the i18n layer is initialized
//! and carries a translation for the key, that wins. Degrades gracefully
//! when i18n is absent or the key is missing.

use opal_i18n::I18nState;

pub(crate) fn localized(key: &str, fallback: &str) -> String {
    if let Some(state) = I18nState::try_get() {
        let resolved = state.translate(key, &[]);
        if resolved != key {
            return resolved;
        }
    }
    fallback.to_string()
}
