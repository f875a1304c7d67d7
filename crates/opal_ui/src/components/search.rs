//! Search bar widget
//!
//! A single themed text input mounted into a container; every input event
//! forwards the current query to the search callback.

use opal_layout::prelude::*;
use opal_theme::{ColorToken, FontToken, SpacingToken, ThemeState};

use crate::text::localized;

type SearchHandler = Box<dyn FnMut(&mut ElementTree, &str) + Send>;

/// Search bar configuration
#[derive(Default)]
pub struct SearchOptions {
    placeholder: Option<String>,
    on_search: Option<SearchHandler>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn on_search<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut ElementTree, &str) + Send + 'static,
    {
        self.on_search = Some(Box::new(callback));
        self
    }
}

/// A search bar mounted into a container element
pub struct SearchBar {
    container: ElementId,
    field: ElementId,
}

impl SearchBar {
    /// Mount onto the container with the given `id` attribute; fails fast
    /// when no such element exists
    pub fn new(
        tree: &mut ElementTree,
        container_id: &str,
        options: SearchOptions,
    ) -> Result<Self, LayoutError> {
        let container = tree.require_element(container_id)?;
        let theme = ThemeState::get();
        let foreground = theme.color(ColorToken::Foreground);
        let body = theme.font(FontToken::Body).to_string();
        let padding = theme.spacing_value(SpacingToken::Sm);

        let field = tree.create_element("input");
        tree.set_attribute(field, "type", "text");
        let placeholder = options
            .placeholder
            .unwrap_or_else(|| localized("search.placeholder", "Search..."));
        tree.set_attribute(field, "placeholder", placeholder);
        tree.update_style(field, |style| {
            style.padding = EdgeInsets::uniform(padding);
            style.border = Some(Border::new(1.0, foreground));
            style.border_radius = BorderRadius::Px(4.0);
            style.width = Dimension::Percent(100.0);
            style.font_family = Some(body);
        });

        let mut on_search = options.on_search;
        tree.add_listener(field, event_types::INPUT, move |tree, event| {
            let value = match &event.data {
                EventData::Input { value } => value.clone(),
                _ => return,
            };
            tree.set_attribute(field, "value", value.as_str());
            if let Some(callback) = &mut on_search {
                callback(tree, &value);
            }
        });

        tree.append_child(container, field);
        Ok(Self { container, field })
    }

    pub fn render(&self) -> ElementId {
        self.container
    }

    pub fn field(&self) -> ElementId {
        self.field
    }

    pub fn value<'t>(&self, tree: &'t ElementTree) -> &'t str {
        tree.attribute(self.field, "value").unwrap_or_default()
    }

    pub fn destroy(self, tree: &mut ElementTree) {
        tree.remove(self.field);
    }
}
