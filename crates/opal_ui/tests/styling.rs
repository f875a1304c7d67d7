//! Properties of the base style applicator and the theme inversion rule.

use opal_layout::prelude::*;
use opal_theme::{ColorScheme, ThemeState};
use opal_ui::styling::{apply_base_styles, ink_color, Size, StyleConfig, StyleKind};
use pretty_assertions::assert_eq;
use std::sync::Mutex;

// The scheme flag is process-wide; serialize scheme-dependent tests.
static SCHEME_LOCK: Mutex<()> = Mutex::new(());

fn with_scheme<R>(scheme: ColorScheme, f: impl FnOnce() -> R) -> R {
    let _guard = SCHEME_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    ThemeState::init_default();
    ThemeState::get().set_scheme(scheme);
    let result = f();
    ThemeState::get().set_scheme(ColorScheme::Light);
    result
}

fn styled(scheme: ColorScheme, config: StyleConfig) -> ElementStyle {
    with_scheme(scheme, || {
        let mut tree = ElementTree::new();
        let el = tree.create_element("div");
        apply_base_styles(&mut tree, el, &config);
        tree.style(el).cloned().unwrap()
    })
}

#[test]
fn applying_twice_matches_applying_once() {
    with_scheme(ColorScheme::Dark, || {
        let mut tree = ElementTree::new();
        let once = tree.create_element("div");
        let twice = tree.create_element("div");
        let config = StyleConfig::new()
            .kind(StyleKind::Container)
            .size(Size::Xl)
            .rounded(true)
            .shadow(true)
            .bordered(true);

        apply_base_styles(&mut tree, once, &config);
        apply_base_styles(&mut tree, twice, &config);
        apply_base_styles(&mut tree, twice, &config);

        assert_eq!(tree.style(once), tree.style(twice));
    });
}

#[test]
fn theme_inversion_for_non_container_kinds() {
    for kind in [StyleKind::Text, StyleKind::Heading, StyleKind::Interactive] {
        let light = styled(ColorScheme::Light, StyleConfig::new().kind(kind));
        assert_eq!(
            light.color.map(|c| c.to_hex_string()),
            Some("#1f2937".to_string()),
            "light ink must be the foreground token"
        );

        let dark = styled(ColorScheme::Dark, StyleConfig::new().kind(kind));
        assert_eq!(
            dark.color.map(|c| c.to_hex_string()),
            Some("#ffffff".to_string()),
            "dark ink must be the background token"
        );
    }
}

#[test]
fn container_inversion_swaps_both_roles() {
    let config = StyleConfig::new().kind(StyleKind::Container);

    let dark = styled(ColorScheme::Dark, config);
    assert_eq!(
        dark.background.map(|c| c.to_hex_string()),
        Some("#1f2937".to_string())
    );
    assert_eq!(
        dark.color.map(|c| c.to_hex_string()),
        Some("#ffffff".to_string())
    );

    let light = styled(ColorScheme::Light, config);
    assert_eq!(
        light.background.map(|c| c.to_hex_string()),
        Some("#ffffff".to_string())
    );
    assert_eq!(
        light.color.map(|c| c.to_hex_string()),
        Some("#1f2937".to_string())
    );
}

#[test]
fn border_and_rounding_precedence() {
    let base = StyleConfig::new();

    let both = styled(ColorScheme::Light, base.bordered(true).rounded(true));
    assert_eq!(both.border.map(|b| b.width), Some(1.0));
    assert_eq!(both.border_radius, BorderRadius::Full);

    let bordered = styled(ColorScheme::Light, base.bordered(true));
    assert_eq!(bordered.border.map(|b| b.width), Some(1.0));
    assert_eq!(bordered.border_radius, BorderRadius::Px(4.0));

    let rounded = styled(ColorScheme::Light, base.rounded(true));
    assert_eq!(rounded.border, None);
    assert_eq!(rounded.border_radius, BorderRadius::Full);

    let neither = styled(ColorScheme::Light, base);
    assert_eq!(neither.border, None);
    assert_eq!(neither.border_radius, BorderRadius::None);
}

#[test]
fn border_color_follows_ink_rule() {
    let dark = styled(ColorScheme::Dark, StyleConfig::new().bordered(true));
    assert_eq!(
        dark.border.map(|b| b.color.to_hex_string()),
        Some("#ffffff".to_string())
    );
}

#[test]
fn shadow_is_fixed_and_soft() {
    let with_shadow = styled(ColorScheme::Light, StyleConfig::new().shadow(true));
    let shadow = with_shadow.shadow.expect("shadow requested");
    assert_eq!(
        (shadow.offset_x, shadow.offset_y, shadow.blur, shadow.spread),
        (0.0, 2.0, 4.0, 0.0)
    );
    assert!(shadow.color.a < 0.2);

    let without = styled(ColorScheme::Light, StyleConfig::new());
    assert_eq!(without.shadow, None);
}

#[test]
fn ink_helper_matches_applicator() {
    with_scheme(ColorScheme::Dark, || {
        let mut tree = ElementTree::new();
        let el = tree.create_element("span");
        apply_base_styles(&mut tree, el, &StyleConfig::new());
        assert_eq!(
            tree.style(el).unwrap().color,
            Some(ink_color(ThemeState::get()))
        );
    });
}
