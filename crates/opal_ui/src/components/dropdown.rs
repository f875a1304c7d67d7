//! Dropdown widget
//!
//! A trigger button toggling an absolutely positioned menu of actions.
//! The open state lives on the menu element's `display` property.

use opal_layout::prelude::*;
use opal_theme::ThemeState;

use crate::styling::{apply_base_styles, Size, StyleConfig, StyleKind};

/// Edge the menu aligns to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuAlign {
    #[default]
    Left,
    Right,
}

type ItemAction = Box<dyn FnMut(&mut ElementTree) + Send>;

struct MenuItem {
    label: String,
    action: ItemAction,
}

/// Create a dropdown with a trigger label
pub fn dropdown(trigger_text: impl Into<String>) -> DropdownBuilder {
    DropdownBuilder {
        trigger_text: trigger_text.into(),
        items: Vec::new(),
        align: MenuAlign::default(),
        size: Size::Md,
    }
}

/// Builder for creating dropdowns
pub struct DropdownBuilder {
    trigger_text: String,
    items: Vec<MenuItem>,
    align: MenuAlign,
    size: Size,
}

impl DropdownBuilder {
    /// Add a menu item with its action
    pub fn item<F>(mut self, label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut ElementTree) + Send + 'static,
    {
        self.items.push(MenuItem {
            label: label.into(),
            action: Box::new(action),
        });
        self
    }

    pub fn align(mut self, align: MenuAlign) -> Self {
        self.align = align;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Build the dropdown into the tree
    pub fn build(self, tree: &mut ElementTree) -> Dropdown {
        let theme = ThemeState::get();
        let spacing = theme.spacing().clone();

        let container = tree.create_element("div");
        apply_base_styles(
            tree,
            container,
            &StyleConfig::new().kind(StyleKind::Container).size(self.size),
        );
        tree.update_style(container, |style| {
            style.position = Position::Relative;
            style.display = Display::InlineBlock;
        });

        let trigger = tree.create_element("button");
        tree.set_text(trigger, self.trigger_text);
        apply_base_styles(
            tree,
            trigger,
            &StyleConfig::new()
                .kind(StyleKind::Interactive)
                .size(self.size),
        );
        tree.update_style(trigger, |style| {
            style.padding = EdgeInsets::symmetric(spacing.sm, spacing.md);
        });

        let menu = tree.create_element("div");
        apply_base_styles(
            tree,
            menu,
            &StyleConfig::new()
                .kind(StyleKind::Container)
                .size(self.size)
                .shadow(true)
                .bordered(true),
        );
        let align = self.align;
        tree.update_style(menu, |style| {
            style.position = Position::Absolute;
            match align {
                MenuAlign::Left => style.inset.left = Some(Dimension::Px(0.0)),
                MenuAlign::Right => style.inset.right = Some(Dimension::Px(0.0)),
            }
            style.inset.top = Some(Dimension::Percent(100.0));
            style.margin.top = spacing.xs;
            style.min_width = Some(160.0);
            style.z_index = Some(1000);
            style.display = Display::None;
        });

        tree.add_listener(trigger, event_types::CLICK, move |tree, _| {
            let open = tree
                .style(menu)
                .map(|style| style.display != Display::None)
                .unwrap_or(false);
            tree.update_style(menu, |style| {
                style.display = if open { Display::None } else { Display::Block };
            });
        });

        for item in self.items {
            let entry = tree.create_element("button");
            tree.set_text(entry, item.label);
            apply_base_styles(
                tree,
                entry,
                &StyleConfig::new()
                    .kind(StyleKind::Interactive)
                    .size(self.size),
            );
            tree.update_style(entry, |style| {
                style.display = Display::Block;
                style.width = Dimension::Percent(100.0);
                style.text_align = Some(TextAlign::Left);
                style.border = None;
                style.border_radius = BorderRadius::None;
            });

            tree.add_listener(entry, event_types::POINTER_ENTER, move |tree, _| {
                tree.update_style(entry, |style| {
                    style.background = Some(Color::BLACK.with_alpha(0.1));
                });
            });
            tree.add_listener(entry, event_types::POINTER_LEAVE, move |tree, _| {
                tree.update_style(entry, |style| {
                    style.background = Some(Color::TRANSPARENT);
                });
            });

            let mut action = item.action;
            tree.add_listener(entry, event_types::CLICK, move |tree, _| {
                action(tree);
                tree.update_style(menu, |style| style.display = Display::None);
            });

            tree.append_child(menu, entry);
        }

        tree.append_child(container, trigger);
        tree.append_child(container, menu);

        Dropdown {
            container,
            trigger,
            menu,
        }
    }
}

/// A built dropdown
pub struct Dropdown {
    container: ElementId,
    trigger: ElementId,
    menu: ElementId,
}

impl Dropdown {
    pub fn render(&self) -> ElementId {
        self.container
    }

    pub fn trigger(&self) -> ElementId {
        self.trigger
    }

    pub fn menu(&self) -> ElementId {
        self.menu
    }

    pub fn is_open(&self, tree: &ElementTree) -> bool {
        tree.style(self.menu)
            .map(|style| style.display != Display::None)
            .unwrap_or(false)
    }

    pub fn open(&self, tree: &mut ElementTree) {
        tree.update_style(self.menu, |style| style.display = Display::Block);
    }

    pub fn close(&self, tree: &mut ElementTree) {
        tree.update_style(self.menu, |style| style.display = Display::None);
    }

    pub fn destroy(self, tree: &mut ElementTree) {
        tree.remove(self.container);
    }
}
