//! Input widget
//!
//! A labelled text-entry field in a column container: optional label,
//! the input element, optional icons, and helper/error copy underneath.
//! Focus swaps the border to the primary color with a soft focus ring.

use opal_layout::prelude::*;
use opal_theme::{ColorToken, FontToken, RadiusToken, ThemeState};

use crate::styling::{ink_color, surface_color, Size};

/// Entry mode of the underlying input element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Search,
    Tel,
    Url,
}

impl InputType {
    fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Number => "number",
            InputType::Search => "search",
            InputType::Tel => "tel",
            InputType::Url => "url",
        }
    }
}

type ChangeHandler = Box<dyn FnMut(&mut ElementTree, &str) + Send>;
type EventHandler = Box<dyn FnMut(&mut ElementTree, &mut Event) + Send>;

/// Create an input builder
pub fn input() -> InputBuilder {
    InputBuilder {
        input_type: InputType::Text,
        value: None,
        placeholder: None,
        label: None,
        disabled: false,
        required: false,
        size: Size::Md,
        rounded: false,
        error: None,
        helper_text: None,
        prefix_icon: None,
        suffix_icon: None,
        on_change: None,
        on_focus: None,
        on_blur: None,
        on_key_down: None,
    }
}

/// Builder for creating inputs
pub struct InputBuilder {
    input_type: InputType,
    value: Option<String>,
    placeholder: Option<String>,
    label: Option<String>,
    disabled: bool,
    required: bool,
    size: Size,
    rounded: bool,
    error: Option<String>,
    helper_text: Option<String>,
    prefix_icon: Option<String>,
    suffix_icon: Option<String>,
    on_change: Option<ChangeHandler>,
    on_focus: Option<EventHandler>,
    on_blur: Option<EventHandler>,
    on_key_down: Option<EventHandler>,
}

impl InputBuilder {
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    pub fn prefix_icon(mut self, icon: impl Into<String>) -> Self {
        self.prefix_icon = Some(icon.into());
        self
    }

    pub fn suffix_icon(mut self, icon: impl Into<String>) -> Self {
        self.suffix_icon = Some(icon.into());
        self
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut ElementTree, &str) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_focus<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut ElementTree, &mut Event) + Send + 'static,
    {
        self.on_focus = Some(Box::new(callback));
        self
    }

    pub fn on_blur<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut ElementTree, &mut Event) + Send + 'static,
    {
        self.on_blur = Some(Box::new(callback));
        self
    }

    pub fn on_key_down<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut ElementTree, &mut Event) + Send + 'static,
    {
        self.on_key_down = Some(Box::new(callback));
        self
    }

    /// Build the input into the tree
    pub fn build(self, tree: &mut ElementTree) -> Input {
        let theme = ThemeState::get();
        let spacing = theme.spacing().clone();
        let typography = theme.typography().clone();
        let ink = ink_color(theme);
        let surface = surface_color(theme);

        let container = tree.create_element("div");
        tree.update_style(container, |style| {
            style.display = Display::Flex;
            style.flex_direction = FlexDirection::Column;
            style.gap = spacing.xs;
            style.width = Dimension::Percent(100.0);
        });

        let field = tree.create_element("input");
        tree.set_attribute(field, "type", self.input_type.as_str());
        tree.set_attribute(field, "value", self.value.unwrap_or_default());
        if let Some(placeholder) = &self.placeholder {
            tree.set_attribute(field, "placeholder", placeholder.as_str());
        }
        if self.disabled {
            tree.set_attribute(field, "disabled", "");
        }
        if self.required {
            tree.set_attribute(field, "required", "");
        }

        let (padding, font_size, radius) = field_metrics(self.size, self.rounded, theme);
        tree.update_style(field, |style| {
            style.font_family = Some(typography.font_body.clone());
            style.color = Some(ink);
            style.background = Some(surface);
            style.border = Some(Border::new(1.0, ink));
            style.transition = Some(Transition::new(TransitionProperty::All, 200, Easing::Ease));
            style.box_sizing = BoxSizing::BorderBox;
            style.width = Dimension::Percent(100.0);
            style.padding = padding;
            style.font_size = Some(font_size);
            style.border_radius = BorderRadius::Px(radius);
        });

        let primary = theme.color(ColorToken::Primary);
        let mut on_focus = self.on_focus;
        tree.add_listener(field, event_types::FOCUS, move |tree, event| {
            tree.update_style(field, |style| {
                if let Some(border) = &mut style.border {
                    border.color = primary;
                }
                style.shadow = Some(Shadow::new(0.0, 0.0, 0.0, 2.0, primary.with_alpha(0.125)));
            });
            if let Some(callback) = &mut on_focus {
                callback(tree, event);
            }
        });

        let mut on_blur = self.on_blur;
        tree.add_listener(field, event_types::BLUR, move |tree, event| {
            let ink = ink_color(ThemeState::get());
            tree.update_style(field, |style| {
                if let Some(border) = &mut style.border {
                    border.color = ink;
                }
                style.shadow = None;
            });
            if let Some(callback) = &mut on_blur {
                callback(tree, event);
            }
        });

        let mut on_change = self.on_change;
        tree.add_listener(field, event_types::INPUT, move |tree, event| {
            let value = match &event.data {
                EventData::Input { value } => value.clone(),
                _ => return,
            };
            tree.set_attribute(field, "value", value.as_str());
            if let Some(callback) = &mut on_change {
                callback(tree, &value);
            }
        });

        if let Some(mut on_key_down) = self.on_key_down {
            tree.add_listener(field, event_types::KEY_DOWN, move |tree, event| {
                on_key_down(tree, event);
            });
        }

        tree.append_child(container, field);

        let required = self.required;
        let label = self.label.map(|label_text| {
            let label_el = tree.create_element("label");
            tree.set_text(label_el, label_text);
            tree.update_style(label_el, |style| {
                style.font_family = Some(typography.font_body.clone());
                style.font_size = Some(typography.text_sm);
                style.color = Some(ink);
                style.margin.bottom = spacing.xs;
            });
            if required {
                let star = tree.create_element("span");
                tree.set_text(star, " *");
                let error_color = ThemeState::get().color(ColorToken::Error);
                tree.update_style(star, |style| style.color = Some(error_color));
                tree.append_child(label_el, star);
            }
            tree.prepend_child(container, label_el);
            label_el
        });

        if self.prefix_icon.is_some() || self.suffix_icon.is_some() {
            wrap_with_icons(
                tree,
                container,
                field,
                &spacing,
                self.prefix_icon.as_deref(),
                self.suffix_icon.as_deref(),
            );
        }

        let helper = self.helper_text.map(|helper_text| {
            let helper_el = tree.create_element("p");
            tree.set_text(helper_el, helper_text);
            tree.update_style(helper_el, |style| {
                style.font_family = Some(typography.font_body.clone());
                style.font_size = Some(typography.text_xs);
                style.color = Some(ink.with_alpha(0.5));
                style.margin = EdgeInsets::ZERO;
                style.margin.top = spacing.xs;
            });
            tree.append_child(container, helper_el);
            helper_el
        });

        let mut widget = Input {
            container,
            field,
            label,
            helper,
            error: None,
        };
        if let Some(message) = self.error {
            widget.set_error(tree, Some(message.as_str()));
        }
        widget
    }
}

fn field_metrics(size: Size, rounded: bool, theme: &ThemeState) -> (EdgeInsets, f32, f32) {
    let spacing = theme.spacing();
    let typography = theme.typography();
    match size {
        Size::Sm => (
            EdgeInsets::symmetric(spacing.xs, spacing.sm),
            typography.text_sm,
            theme.radius(if rounded { RadiusToken::Lg } else { RadiusToken::Sm }),
        ),
        Size::Lg => (
            EdgeInsets::symmetric(spacing.md, spacing.lg),
            typography.text_lg,
            theme.radius(if rounded { RadiusToken::Xxl } else { RadiusToken::Md }),
        ),
        _ => (
            EdgeInsets::symmetric(spacing.sm, spacing.md),
            typography.text_base,
            theme.radius(if rounded { RadiusToken::Xl } else { RadiusToken::Sm }),
        ),
    }
}

fn wrap_with_icons(
    tree: &mut ElementTree,
    container: ElementId,
    field: ElementId,
    spacing: &opal_theme::SpacingTokens,
    prefix: Option<&str>,
    suffix: Option<&str>,
) {
    let theme = ThemeState::get();
    let body = theme.font(FontToken::Body).to_string();

    let wrapper = tree.create_element("div");
    tree.update_style(wrapper, |style| {
        style.display = Display::Flex;
        style.align_items = Some(Align::Center);
        style.position = Position::Relative;
        style.width = Dimension::Percent(100.0);
    });
    tree.append_child(wrapper, field);

    if let Some(icon) = prefix {
        let icon_el = tree.create_element("span");
        tree.set_text(icon_el, icon);
        let left = spacing.sm;
        tree.update_style(icon_el, |style| {
            style.font_family = Some(body.clone());
            style.position = Position::Absolute;
            style.inset.left = Some(Dimension::Px(left));
            style.pointer_events = false;
        });
        tree.prepend_child(wrapper, icon_el);
        tree.update_style(field, |style| style.padding.left += 24.0);
    }

    if let Some(icon) = suffix {
        let icon_el = tree.create_element("span");
        tree.set_text(icon_el, icon);
        let right = spacing.sm;
        tree.update_style(icon_el, |style| {
            style.font_family = Some(body);
            style.position = Position::Absolute;
            style.inset.right = Some(Dimension::Px(right));
            style.pointer_events = false;
        });
        tree.append_child(wrapper, icon_el);
        tree.update_style(field, |style| style.padding.right += 24.0);
    }

    tree.append_child(container, wrapper);
}

/// A built input
pub struct Input {
    container: ElementId,
    field: ElementId,
    label: Option<ElementId>,
    helper: Option<ElementId>,
    error: Option<ElementId>,
}

impl Input {
    pub fn render(&self) -> ElementId {
        self.container
    }

    /// The underlying input element
    pub fn field(&self) -> ElementId {
        self.field
    }

    pub fn label(&self) -> Option<ElementId> {
        self.label
    }

    pub fn value<'t>(&self, tree: &'t ElementTree) -> &'t str {
        tree.attribute(self.field, "value").unwrap_or_default()
    }

    pub fn set_value(&self, tree: &mut ElementTree, value: impl Into<String>) {
        tree.set_attribute(self.field, "value", value);
    }

    /// Replace the error message, or clear it with `None`
    pub fn set_error(&mut self, tree: &mut ElementTree, message: Option<&str>) {
        if let Some(existing) = self.error.take() {
            tree.remove(existing);
        }

        let theme = ThemeState::get();
        match message {
            Some(message) => {
                let error_color = theme.color(ColorToken::Error);
                let typography = theme.typography().clone();
                let top = theme.spacing().xs;
                let error_el = tree.create_element("p");
                tree.set_text(error_el, message);
                tree.update_style(error_el, |style| {
                    style.font_family = Some(typography.font_body.clone());
                    style.font_size = Some(typography.text_xs);
                    style.color = Some(error_color);
                    style.margin = EdgeInsets::ZERO;
                    style.margin.top = top;
                });
                let field = self.field;
                tree.update_style(field, |style| {
                    if let Some(border) = &mut style.border {
                        border.color = error_color;
                    }
                });
                tree.append_child(self.container, error_el);
                self.error = Some(error_el);
            }
            None => {
                let ink = ink_color(theme);
                tree.update_style(self.field, |style| {
                    if let Some(border) = &mut style.border {
                        border.color = ink;
                    }
                });
            }
        }
    }

    /// Dispatch a focus event to the field
    pub fn focus(&self, tree: &mut ElementTree) {
        tree.dispatch(self.field, event_types::FOCUS, EventData::None);
    }

    /// Dispatch a blur event to the field
    pub fn blur(&self, tree: &mut ElementTree) {
        tree.dispatch(self.field, event_types::BLUR, EventData::None);
    }

    pub fn destroy(self, tree: &mut ElementTree) {
        tree.remove(self.container);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::with_scheme;
    use opal_theme::ColorScheme;

    #[test]
    fn test_build_themed_field() {
        with_scheme(ColorScheme::Dark, || {
            let mut tree = ElementTree::new();
            let field = input().label("Name").build(&mut tree);
            let style = tree.style(field.field()).unwrap();
            // Inverted ink in dark mode: text in background token, surface
            // in foreground token.
            assert_eq!(style.color, Some(Color::WHITE));
            assert_eq!(style.background, Some(Color::from_hex(0x1F2937)));
            assert_eq!(style.border.map(|b| b.color), Some(Color::WHITE));
            // Label comes first in the column.
            let children = tree.children(field.render());
            assert_eq!(children[0], field.label().unwrap());
        });
    }

    #[test]
    fn test_size_metrics() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let small = input().size(Size::Sm).rounded(true).build(&mut tree);
            let style = tree.style(small.field()).unwrap();
            assert_eq!(style.padding, EdgeInsets::symmetric(4.0, 8.0));
            assert_eq!(style.font_size, Some(14.0));
            assert_eq!(style.border_radius, BorderRadius::Px(12.0));

            let large = input().size(Size::Lg).build(&mut tree);
            let style = tree.style(large.field()).unwrap();
            assert_eq!(style.padding, EdgeInsets::symmetric(16.0, 24.0));
            assert_eq!(style.border_radius, BorderRadius::Px(6.0));
        });
    }

    #[test]
    fn test_focus_ring_and_blur_restore() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let field = input().build(&mut tree);
            field.focus(&mut tree);
            let style = tree.style(field.field()).unwrap();
            assert_eq!(style.border.map(|b| b.color), Some(Color::from_hex(0x3B82F6)));
            assert!(style.shadow.is_some());

            field.blur(&mut tree);
            let style = tree.style(field.field()).unwrap();
            assert_eq!(style.border.map(|b| b.color), Some(Color::from_hex(0x1F2937)));
            assert!(style.shadow.is_none());
        });
    }

    #[test]
    fn test_input_event_updates_value_and_notifies() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let marker = tree.create_element("div");
            let field = input()
                .on_change(move |tree, value| {
                    let value = value.to_string();
                    tree.set_text(marker, value);
                })
                .build(&mut tree);

            tree.dispatch(
                field.field(),
                event_types::INPUT,
                EventData::Input {
                    value: "hello".to_string(),
                },
            );
            assert_eq!(field.value(&tree), "hello");
            assert_eq!(tree.text(marker), Some("hello"));
        });
    }

    #[test]
    fn test_error_state_set_and_clear() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let mut field = input().error("required").build(&mut tree);
            let error_color = Color::from_hex(0xEF4444);
            assert_eq!(
                tree.style(field.field()).unwrap().border.map(|b| b.color),
                Some(error_color)
            );

            field.set_error(&mut tree, None);
            assert_eq!(
                tree.style(field.field()).unwrap().border.map(|b| b.color),
                Some(Color::from_hex(0x1F2937))
            );
        });
    }

    #[test]
    fn test_icons_pad_the_field() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let field = input().prefix_icon("@").build(&mut tree);
            let style = tree.style(field.field()).unwrap();
            // Base horizontal padding (md=16) plus the icon allowance.
            assert_eq!(style.padding.left, 40.0);
        });
    }
}
