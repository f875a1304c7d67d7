//! Navigation bar widget
//!
//! A brand row with a hamburger toggle and a link list. Below the `md`
//! breakpoint the links collapse behind the toggle; at or above it they lay
//! out as a row and the toggle hides.

use opal_layout::prelude::*;
use opal_theme::{BreakpointToken, ColorToken, FontToken, SpacingToken, ThemeState};

use crate::text::localized;

/// One navigation entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A navigation bar mounted into a container element
pub struct Navigation {
    container: ElementId,
    brand: String,
    links_el: Option<ElementId>,
    toggle_el: Option<ElementId>,
}

impl Navigation {
    /// Mount onto the container with the given `id` attribute; fails fast
    /// when no such element exists
    pub fn new(tree: &ElementTree, container_id: &str) -> Result<Self, LayoutError> {
        let container = tree.require_element(container_id)?;
        Ok(Self {
            container,
            brand: "MyApp".to_string(),
            links_el: None,
            toggle_el: None,
        })
    }

    /// Override the brand label shown in the top bar
    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
    }

    pub fn render(&mut self, tree: &mut ElementTree, links: &[NavLink]) {
        tree.clear_children(self.container);

        let theme = ThemeState::get();
        let primary = theme.color(ColorToken::Primary);
        let background = theme.color(ColorToken::Background);
        let warning = theme.color(ColorToken::Warning);
        let body = theme.font(FontToken::Body).to_string();
        let heading = theme.font(FontToken::Heading).to_string();
        let pad_md = theme.spacing_value(SpacingToken::Md);
        let pad_sm = theme.spacing_value(SpacingToken::Sm);
        let heading_size = theme.typography().text_xl;

        let wrapper = tree.create_element("div");
        tree.update_style(wrapper, |style| {
            style.background = Some(primary);
            style.color = Some(background);
            style.font_family = Some(body);
        });

        let top_bar = tree.create_element("div");
        tree.update_style(top_bar, |style| {
            style.display = Display::Flex;
            style.align_items = Some(Align::Center);
            style.justify_content = Some(Align::SpaceBetween);
            style.padding = EdgeInsets::uniform(pad_md);
        });

        let brand = tree.create_element("span");
        tree.set_text(brand, self.brand.as_str());
        tree.update_style(brand, |style| {
            style.font_family = Some(heading);
            style.font_size = Some(heading_size);
        });
        tree.append_child(top_bar, brand);

        let links_el = tree.create_element("div");
        tree.set_attribute(links_el, "id", "nav-links");
        tree.update_style(links_el, |style| {
            style.display = Display::None;
            style.padding = EdgeInsets::uniform(pad_md);
        });

        let toggle = tree.create_element("button");
        tree.set_text(toggle, "☰");
        tree.update_style(toggle, |style| {
            style.cursor = Cursor::Pointer;
        });
        tree.add_listener(toggle, event_types::CLICK, move |tree, _| {
            let open = tree
                .style(links_el)
                .map(|style| style.display != Display::None)
                .unwrap_or(false);
            tree.update_style(links_el, |style| {
                style.display = if open { Display::None } else { Display::Flex };
                style.flex_direction = FlexDirection::Column;
            });
        });
        tree.append_child(top_bar, toggle);

        if links.is_empty() {
            let empty = tree.create_element("span");
            tree.set_text(empty, localized("nav.empty", "No navigation items available"));
            tree.update_style(empty, |style| style.color = Some(warning));
            tree.append_child(links_el, empty);
        } else {
            for link in links {
                let anchor = tree.create_element("a");
                tree.set_text(anchor, link.label.as_str());
                tree.set_attribute(anchor, "href", link.href.as_str());
                tree.update_style(anchor, |style| {
                    style.padding = EdgeInsets::uniform(pad_sm);
                    style.border_radius = BorderRadius::Px(4.0);
                    style.cursor = Cursor::Pointer;
                });
                tree.append_child(links_el, anchor);
            }
        }

        tree.append_child(wrapper, top_bar);
        tree.append_child(wrapper, links_el);
        tree.append_child(self.container, wrapper);

        self.links_el = Some(links_el);
        self.toggle_el = Some(toggle);
    }

    /// Collapse or expand for a viewport width against the `md` breakpoint
    pub fn set_viewport_width(&self, tree: &mut ElementTree, width: f32) {
        let (Some(links_el), Some(toggle)) = (self.links_el, self.toggle_el) else {
            return;
        };
        let threshold = ThemeState::get().breakpoint(BreakpointToken::Md);
        let gap = ThemeState::get().spacing_value(SpacingToken::Md);
        if width >= threshold {
            tree.update_style(links_el, |style| {
                style.display = Display::Flex;
                style.flex_direction = FlexDirection::Row;
                style.gap = gap;
            });
            tree.update_style(toggle, |style| style.display = Display::None);
        } else {
            tree.update_style(links_el, |style| {
                style.display = Display::None;
                style.flex_direction = FlexDirection::Column;
            });
            tree.update_style(toggle, |style| style.display = Display::Block);
        }
    }

    pub fn is_open(&self, tree: &ElementTree) -> bool {
        self.links_el
            .and_then(|links| tree.style(links))
            .map(|style| style.display != Display::None)
            .unwrap_or(false)
    }

    pub fn toggle_el(&self) -> Option<ElementId> {
        self.toggle_el
    }

    pub fn links_el(&self) -> Option<ElementId> {
        self.links_el
    }

    pub fn destroy(self, tree: &mut ElementTree) {
        tree.clear_children(self.container);
    }
}
