//! Base style applicator
//!
//! Deterministically translates a [`StyleConfig`] into concrete style
//! assignments on a target element, as a function of (configuration,
//! current scheme, design tokens). Later steps may overwrite earlier ones;
//! every step fully overwrites the properties it owns, so applying the
//! same configuration twice yields the same final style state.

use opal_layout::prelude::*;
use opal_theme::{FontToken, RadiusToken, ShadowToken, ThemeState, TypographyTokens};

/// Semantic role of the styled element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StyleKind {
    #[default]
    Text,
    Heading,
    Container,
    Interactive,
}

/// Size step of the styled element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Size {
    /// Font size for this step (px at a 16px root)
    pub fn font_size(self, typography: &TypographyTokens) -> f32 {
        match self {
            Size::Xs => typography.text_xs,
            Size::Sm => typography.text_sm,
            Size::Md => typography.text_base,
            Size::Lg => typography.text_lg,
            Size::Xl => typography.text_xl,
        }
    }
}

/// Styling intent for one applicator call
///
/// Transient - constructed per call and consumed immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleConfig {
    pub kind: StyleKind,
    pub size: Size,
    pub rounded: bool,
    pub shadow: bool,
    pub bordered: bool,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: StyleKind) -> Self {
        self.kind = kind;
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

    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }
}

/// The ink color under the active scheme's inversion rule
///
/// In dark mode ink renders in the background token color and vice versa.
/// This is the single convention every widget replicates.
pub fn ink_color(theme: &ThemeState) -> Color {
    if theme.scheme().is_dark() {
        theme.colors().background
    } else {
        theme.colors().foreground
    }
}

/// The surface color paired with [`ink_color`]
pub fn surface_color(theme: &ThemeState) -> Color {
    if theme.scheme().is_dark() {
        theme.colors().foreground
    } else {
        theme.colors().background
    }
}

/// Apply the shared styling contract to a target element
///
/// Never fails; a stale target id makes this a no-op.
pub fn apply_base_styles(tree: &mut ElementTree, target: ElementId, config: &StyleConfig) {
    let theme = ThemeState::get();
    let ink = ink_color(theme);
    let surface = surface_color(theme);
    let font_size = config.size.font_size(theme.typography());
    let small_radius = theme.radius(RadiusToken::Sm);
    let soft_shadow = *theme.shadow(ShadowToken::Soft);
    let body = theme.font(FontToken::Body).to_string();
    let heading = theme.font(FontToken::Heading).to_string();
    let typography = theme.typography();

    tree.update_style(target, |style| {
        // 1. Reset
        style.margin = EdgeInsets::ZERO;
        style.padding = EdgeInsets::ZERO;
        style.box_sizing = BoxSizing::BorderBox;

        // 2. Typography base
        match config.kind {
            StyleKind::Heading => {
                style.font_family = Some(heading);
                style.font_weight = Some(typography.weight_semibold);
                style.line_height = Some(typography.leading_tight);
            }
            StyleKind::Interactive => {
                style.font_family = Some(body);
                style.cursor = Cursor::Pointer;
                style.user_select = false;
            }
            StyleKind::Text | StyleKind::Container => {
                style.font_family = Some(body);
                style.line_height = Some(typography.leading_normal);
            }
        }

        // 3. Font size - a closed enum, so every size assigns one
        style.font_size = Some(font_size);

        // 4. Colors under the inverted-ink convention
        if config.kind == StyleKind::Container {
            style.background = Some(surface);
            style.color = Some(ink);
        } else {
            style.color = Some(ink);
        }

        // 5. Border and shape, border taking precedence over bare rounding
        if config.bordered {
            style.border = Some(Border::new(1.0, ink));
            style.border_radius = if config.rounded {
                BorderRadius::Full
            } else {
                BorderRadius::Px(small_radius)
            };
        } else if config.rounded {
            style.border_radius = BorderRadius::Full;
        }

        // 6. Shadow
        style.shadow = if config.shadow { Some(soft_shadow) } else { None };

        // 7. Interactive transition
        style.transition = if config.kind == StyleKind::Interactive {
            Some(Transition::new(TransitionProperty::All, 200, Easing::Ease))
        } else {
            None
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::with_scheme;
    use opal_theme::ColorScheme;

    fn styled(scheme: ColorScheme, config: StyleConfig) -> ElementStyle {
        with_scheme(scheme, || {
            let mut tree = ElementTree::new();
            let el = tree.create_element("div");
            apply_base_styles(&mut tree, el, &config);
            tree.style(el).cloned().unwrap()
        })
    }

    #[test]
    fn test_reset_and_box_sizing() {
        let style = styled(ColorScheme::Light, StyleConfig::new());
        assert_eq!(style.margin, EdgeInsets::ZERO);
        assert_eq!(style.padding, EdgeInsets::ZERO);
        assert_eq!(style.box_sizing, BoxSizing::BorderBox);
    }

    #[test]
    fn test_heading_typography() {
        let config = StyleConfig::new().kind(StyleKind::Heading);
        let style = styled(ColorScheme::Light, config);
        assert_eq!(style.font_family.as_deref(), Some("'Poppins', sans-serif"));
        assert_eq!(style.font_weight, Some(600));
        assert_eq!(style.line_height, Some(1.25));
    }

    #[test]
    fn test_interactive_affordances() {
        let config = StyleConfig::new().kind(StyleKind::Interactive);
        let style = styled(ColorScheme::Light, config);
        assert_eq!(style.cursor, Cursor::Pointer);
        assert!(!style.user_select);
        assert_eq!(
            style.transition,
            Some(Transition::new(TransitionProperty::All, 200, Easing::Ease))
        );
        // Non-interactive kinds carry no transition.
        let text = styled(ColorScheme::Light, StyleConfig::new());
        assert_eq!(text.transition, None);
    }

    #[test]
    fn test_font_size_scale() {
        for (size, px) in [
            (Size::Xs, 12.0),
            (Size::Sm, 14.0),
            (Size::Md, 16.0),
            (Size::Lg, 18.0),
            (Size::Xl, 20.0),
        ] {
            let style = styled(ColorScheme::Light, StyleConfig::new().size(size));
            assert_eq!(style.font_size, Some(px));
        }
    }

    #[test]
    fn test_applicator_is_idempotent() {
        with_scheme(ColorScheme::Dark, || {
            let config = StyleConfig::new()
                .kind(StyleKind::Interactive)
                .size(Size::Lg)
                .bordered(true)
                .shadow(true);
            let mut tree = ElementTree::new();
            let el = tree.create_element("button");
            apply_base_styles(&mut tree, el, &config);
            let once = tree.style(el).cloned().unwrap();
            apply_base_styles(&mut tree, el, &config);
            let twice = tree.style(el).cloned().unwrap();
            assert_eq!(once, twice);
        });
    }
}
