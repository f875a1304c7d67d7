//! Button widget
//!
//! An interactive, bordered element with a semantic-color background.
//! Hover dims the button, disabled buttons swallow clicks.

use opal_layout::prelude::*;
use opal_theme::{ColorToken, SpacingToken, ThemeState};

use crate::styling::{apply_base_styles, Size, StyleConfig, StyleKind};

/// Semantic background of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
}

impl ButtonVariant {
    fn background(self, theme: &ThemeState) -> Color {
        let token = match self {
            ButtonVariant::Primary => ColorToken::Primary,
            ButtonVariant::Secondary => ColorToken::Secondary,
            ButtonVariant::Success => ColorToken::Success,
            ButtonVariant::Warning => ColorToken::Warning,
            ButtonVariant::Error => ColorToken::Error,
        };
        theme.color(token)
    }
}

type ClickHandler = Box<dyn FnMut(&mut ElementTree, &mut Event) + Send>;

/// Create a button with a label
pub fn button(text: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder {
        text: text.into(),
        variant: ButtonVariant::default(),
        size: Size::Md,
        disabled: false,
        on_click: None,
    }
}

/// Builder for creating buttons
pub struct ButtonBuilder {
    text: String,
    variant: ButtonVariant,
    size: Size,
    disabled: bool,
    on_click: Option<ClickHandler>,
}

impl ButtonBuilder {
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut ElementTree, &mut Event) + Send + 'static,
    {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Build the button into the tree
    pub fn build(self, tree: &mut ElementTree) -> Button {
        let theme = ThemeState::get();
        let element = tree.create_element("button");
        tree.set_text(element, self.text);
        tree.set_attribute(element, "type", "button");

        apply_base_styles(
            tree,
            element,
            &StyleConfig::new()
                .kind(StyleKind::Interactive)
                .size(self.size)
                .bordered(true),
        );

        // Variant background with the inverse of the base ink: the surface
        // is a brand color, so the label uses the opposite pairing.
        let background = self.variant.background(theme);
        let label_color = if theme.scheme().is_dark() {
            theme.colors().foreground
        } else {
            theme.colors().background
        };
        let (padding, font_size) = padding_and_font(self.size, theme);
        tree.update_style(element, |style| {
            style.background = Some(background);
            style.color = Some(label_color);
            style.padding = padding;
            style.font_size = Some(font_size);
        });

        tree.add_listener(element, event_types::POINTER_ENTER, move |tree, _| {
            tree.update_style(element, |style| style.opacity = 0.9);
        });
        tree.add_listener(element, event_types::POINTER_LEAVE, move |tree, _| {
            tree.update_style(element, |style| style.opacity = 1.0);
        });

        if self.disabled {
            tree.set_attribute(element, "disabled", "");
        }

        if let Some(mut callback) = self.on_click {
            tree.add_listener(element, event_types::CLICK, move |tree, event| {
                if tree.attribute(element, "disabled").is_some() {
                    return;
                }
                callback(tree, event);
            });
        }

        Button { element }
    }
}

fn padding_and_font(size: Size, theme: &ThemeState) -> (EdgeInsets, f32) {
    let spacing = theme.spacing();
    let typography = theme.typography();
    match size {
        Size::Sm => (
            EdgeInsets::symmetric(spacing.get(SpacingToken::Xs), spacing.get(SpacingToken::Sm)),
            typography.text_sm,
        ),
        Size::Lg => (
            EdgeInsets::symmetric(spacing.get(SpacingToken::Md), spacing.get(SpacingToken::Lg)),
            typography.text_lg,
        ),
        _ => (
            EdgeInsets::symmetric(spacing.get(SpacingToken::Sm), spacing.get(SpacingToken::Md)),
            typography.text_base,
        ),
    }
}

/// A built button
pub struct Button {
    element: ElementId,
}

impl Button {
    /// The button's element
    pub fn render(&self) -> ElementId {
        self.element
    }

    pub fn set_text(&self, tree: &mut ElementTree, text: impl Into<String>) {
        tree.set_text(self.element, text);
    }

    pub fn set_disabled(&self, tree: &mut ElementTree, disabled: bool) {
        if disabled {
            tree.set_attribute(self.element, "disabled", "");
        } else {
            tree.remove_attribute(self.element, "disabled");
        }
        tree.update_style(self.element, |style| {
            style.opacity = if disabled { 0.7 } else { 1.0 };
            style.cursor = if disabled {
                Cursor::NotAllowed
            } else {
                Cursor::Pointer
            };
        });
    }

    pub fn destroy(self, tree: &mut ElementTree) {
        tree.remove(self.element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::with_scheme;
    use opal_theme::ColorScheme;

    #[test]
    fn test_build_applies_variant_and_padding() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let btn = button("Save")
                .variant(ButtonVariant::Success)
                .size(Size::Sm)
                .build(&mut tree);
            let style = tree.style(btn.render()).unwrap();
            assert_eq!(style.background, Some(Color::from_hex(0x22C55E)));
            assert_eq!(style.color, Some(Color::WHITE));
            assert_eq!(style.padding, EdgeInsets::symmetric(4.0, 8.0));
            assert_eq!(style.font_size, Some(14.0));
            assert_eq!(style.cursor, Cursor::Pointer);
            assert!(style.border.is_some());
            assert_eq!(tree.text(btn.render()), Some("Save"));
        });
    }

    #[test]
    fn test_click_fires_callback() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let marker = tree.create_element("div");
            let btn = button("Go")
                .on_click(move |tree, _| tree.set_text(marker, "clicked"))
                .build(&mut tree);
            tree.dispatch(btn.render(), event_types::CLICK, EventData::None);
            assert_eq!(tree.text(marker), Some("clicked"));
        });
    }

    #[test]
    fn test_disabled_button_swallows_clicks() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let marker = tree.create_element("div");
            let btn = button("Go")
                .disabled(true)
                .on_click(move |tree, _| tree.set_text(marker, "clicked"))
                .build(&mut tree);
            tree.dispatch(btn.render(), event_types::CLICK, EventData::None);
            assert_eq!(tree.text(marker), None);

            btn.set_disabled(&mut tree, false);
            tree.dispatch(btn.render(), event_types::CLICK, EventData::None);
            assert_eq!(tree.text(marker), Some("clicked"));
        });
    }

    #[test]
    fn test_hover_dims_and_restores() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let btn = button("Hover").build(&mut tree);
            tree.dispatch(btn.render(), event_types::POINTER_ENTER, EventData::None);
            assert_eq!(tree.style(btn.render()).unwrap().opacity, 0.9);
            tree.dispatch(btn.render(), event_types::POINTER_LEAVE, EventData::None);
            assert_eq!(tree.style(btn.render()).unwrap().opacity, 1.0);
        });
    }

    #[test]
    fn test_set_disabled_styles() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let btn = button("Hold").build(&mut tree);
            btn.set_disabled(&mut tree, true);
            let style = tree.style(btn.render()).unwrap();
            assert_eq!(style.opacity, 0.7);
            assert_eq!(style.cursor, Cursor::NotAllowed);
        });
    }
}
