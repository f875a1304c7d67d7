//! Loader widget
//!
//! Spinner, dots, bar, and progress variants in an inline-flex column.
//! Keyframe animations are injected as `style` elements and cleaned up on
//! destroy.

use opal_core::clamp;
use opal_layout::prelude::*;
use opal_theme::ThemeState;

use crate::styling::ink_color;

const SPIN_KEYFRAMES: &str = "@keyframes spin { 0% { transform: rotate(0deg); } 100% { transform: rotate(360deg); } }";
const BOUNCE_KEYFRAMES: &str =
    "@keyframes bounce { 0%, 80%, 100% { transform: scale(0); } 40% { transform: scale(1); } }";

/// Loader visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderKind {
    #[default]
    Spinner,
    Dots,
    Bar,
    Progress,
}

/// Loader size steps
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl LoaderSize {
    /// Loader footprint in px
    fn px(self) -> f32 {
        match self {
            LoaderSize::Sm => 24.0,
            LoaderSize::Md => 32.0,
            LoaderSize::Lg => 48.0,
        }
    }

    /// Message font size in px
    fn font_size(self) -> f32 {
        match self {
            LoaderSize::Sm => 12.0,
            LoaderSize::Md => 14.0,
            LoaderSize::Lg => 16.0,
        }
    }
}

/// Create a loader builder
pub fn loader() -> LoaderBuilder {
    LoaderBuilder {
        kind: LoaderKind::default(),
        size: LoaderSize::default(),
        color: None,
        message: None,
        progress: 0.0,
    }
}

/// Builder for creating loaders
pub struct LoaderBuilder {
    kind: LoaderKind,
    size: LoaderSize,
    color: Option<Color>,
    message: Option<String>,
    progress: f32,
}

impl LoaderBuilder {
    pub fn kind(mut self, kind: LoaderKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn size(mut self, size: LoaderSize) -> Self {
        self.size = size;
        self
    }

    /// Override the themed ink color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Initial fill for bar/progress variants (percent)
    pub fn progress(mut self, progress: f32) -> Self {
        self.progress = progress;
        self
    }

    /// Build the loader into the tree
    pub fn build(self, tree: &mut ElementTree) -> Loader {
        let container = tree.create_element("div");
        tree.update_style(container, |style| {
            style.display = Display::InlineFlex;
            style.flex_direction = FlexDirection::Column;
            style.align_items = Some(Align::Center);
            style.justify_content = Some(Align::Center);
            style.gap = 8.0;
        });

        let color = self.color.unwrap_or_else(|| ink_color(ThemeState::get()));
        let mut widget = Loader {
            container,
            indicator: None,
            message: None,
            style_elements: Vec::new(),
            kind: self.kind,
            size: self.size,
            color,
        };
        widget.build_indicator(tree, self.progress);

        if let Some(message) = self.message {
            widget.set_message(tree, message);
        }
        widget
    }
}

/// A built loader
pub struct Loader {
    container: ElementId,
    indicator: Option<ElementId>,
    message: Option<ElementId>,
    style_elements: Vec<ElementId>,
    kind: LoaderKind,
    size: LoaderSize,
    color: Color,
}

impl Loader {
    pub fn render(&self) -> ElementId {
        self.container
    }

    pub fn kind(&self) -> LoaderKind {
        self.kind
    }

    fn build_indicator(&mut self, tree: &mut ElementTree, progress: f32) {
        let indicator = tree.create_element("div");
        match self.kind {
            LoaderKind::Spinner => self.build_spinner(tree, indicator),
            LoaderKind::Dots => self.build_dots(tree, indicator),
            LoaderKind::Bar | LoaderKind::Progress => self.build_bar(tree, indicator, progress),
        }
        tree.prepend_child(self.container, indicator);
        self.indicator = Some(indicator);
    }

    fn build_spinner(&mut self, tree: &mut ElementTree, indicator: ElementId) {
        let size = self.size.px();
        let color = self.color;
        tree.update_style(indicator, |style| {
            style.width = Dimension::Px(size);
            style.height = Dimension::Px(size);
            style.border = Some(Border::new(
                (size / 10.0).max(2.0),
                Color::BLACK.with_alpha(0.1),
            ));
            style.border_radius = BorderRadius::Full;
            style.border_top_color = Some(color);
            style.animation = Some(Animation {
                name: "spin".to_string(),
                duration_ms: 1000,
                easing: Easing::Linear,
                delay_ms: 0,
                infinite: true,
            });
        });
        self.inject_keyframes(tree, SPIN_KEYFRAMES);
    }

    fn build_dots(&mut self, tree: &mut ElementTree, indicator: ElementId) {
        tree.update_style(indicator, |style| {
            style.display = Display::Flex;
            style.gap = 4.0;
        });
        self.inject_keyframes(tree, BOUNCE_KEYFRAMES);

        let dot_size = self.size.px() / 4.0;
        let color = self.color;
        for i in 0..3 {
            let dot = tree.create_element("div");
            tree.update_style(dot, |style| {
                style.width = Dimension::Px(dot_size);
                style.height = Dimension::Px(dot_size);
                style.background = Some(color);
                style.border_radius = BorderRadius::Full;
                style.animation = Some(Animation {
                    name: "bounce".to_string(),
                    duration_ms: 1400,
                    easing: Easing::EaseInOut,
                    delay_ms: i * 160,
                    infinite: true,
                });
            });
            tree.append_child(indicator, dot);
        }
    }

    fn build_bar(&mut self, tree: &mut ElementTree, indicator: ElementId, progress: f32) {
        let size = self.size.px();
        let height = (size / 4.0).max(4.0);
        let color = self.color;
        tree.update_style(indicator, |style| {
            style.width = Dimension::Px(size * 2.0);
            style.height = Dimension::Px(height);
            style.background = Some(color.with_alpha(0.125));
            style.border_radius = BorderRadius::Px(height / 2.0);
            style.overflow_hidden = true;
        });

        let fill = tree.create_element("div");
        let initial = clamp(progress, 0.0, 100.0);
        tree.update_style(fill, |style| {
            style.height = Dimension::Percent(100.0);
            style.width = Dimension::Percent(initial);
            style.background = Some(color);
            style.border_radius = BorderRadius::Px(height / 2.0);
            style.transition = Some(Transition::new(TransitionProperty::Width, 300, Easing::Ease));
        });
        tree.append_child(indicator, fill);
    }

    fn inject_keyframes(&mut self, tree: &mut ElementTree, css: &str) {
        let style_el = tree.create_element("style");
        tree.set_text(style_el, css);
        let root = tree.root();
        tree.append_child(root, style_el);
        self.style_elements.push(style_el);
    }

    /// Move the fill of a bar/progress loader (percent, clamped)
    pub fn set_progress(&self, tree: &mut ElementTree, progress: f32) {
        if !matches!(self.kind, LoaderKind::Bar | LoaderKind::Progress) {
            return;
        }
        let Some(indicator) = self.indicator else {
            return;
        };
        let Some(&fill) = tree.children(indicator).first() else {
            return;
        };
        let fraction = clamp(progress, 0.0, 100.0);
        tree.update_style(fill, |style| {
            style.width = Dimension::Percent(fraction);
        });
    }

    /// Set or create the message line
    pub fn set_message(&mut self, tree: &mut ElementTree, message: impl Into<String>) {
        let message = message.into();
        if let Some(existing) = self.message {
            tree.set_text(existing, message);
            return;
        }
        let ink = ink_color(ThemeState::get());
        let font_size = self.size.font_size();
        let message_el = tree.create_element("div");
        tree.set_text(message_el, message);
        tree.update_style(message_el, |style| {
            // Family inherits from the mount point.
            style.font_size = Some(font_size);
            style.color = Some(ink);
        });
        tree.append_child(self.container, message_el);
        self.message = Some(message_el);
    }

    /// Swap the loader variant, rebuilding the indicator
    pub fn set_kind(&mut self, tree: &mut ElementTree, kind: LoaderKind) {
        if kind == self.kind {
            return;
        }
        if let Some(indicator) = self.indicator.take() {
            tree.remove(indicator);
        }
        self.kind = kind;
        self.build_indicator(tree, 0.0);
    }

    pub fn destroy(self, tree: &mut ElementTree) {
        tree.remove(self.container);
        for style_el in self.style_elements {
            tree.remove(style_el);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::with_scheme;
    use opal_theme::ColorScheme;

    #[test]
    fn test_spinner_geometry_and_animation() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let spinner = loader().size(LoaderSize::Lg).build(&mut tree);
            let indicator = tree.children(spinner.render())[0];
            let style = tree.style(indicator).unwrap();
            assert_eq!(style.width, Dimension::Px(48.0));
            assert_eq!(style.border.map(|b| b.width), Some(4.8));
            assert_eq!(style.border_radius, BorderRadius::Full);
            // Ink-colored top border spins over the faint track.
            assert_eq!(style.border_top_color, Some(Color::from_hex(0x1F2937)));
            assert!(style.animation.as_ref().is_some_and(|a| a.infinite));
        });
    }

    #[test]
    fn test_dots_are_staggered() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let dots = loader().kind(LoaderKind::Dots).build(&mut tree);
            let indicator = tree.children(dots.render())[0];
            let delays: Vec<u64> = tree
                .children(indicator)
                .iter()
                .map(|&dot| tree.style(dot).unwrap().animation.as_ref().unwrap().delay_ms)
                .collect();
            assert_eq!(delays, vec![0, 160, 320]);
        });
    }

    #[test]
    fn test_progress_fill_clamps() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let bar = loader()
                .kind(LoaderKind::Progress)
                .progress(40.0)
                .build(&mut tree);
            let indicator = tree.children(bar.render())[0];
            let fill = tree.children(indicator)[0];
            assert_eq!(tree.style(fill).unwrap().width, Dimension::Percent(40.0));

            bar.set_progress(&mut tree, 150.0);
            assert_eq!(tree.style(fill).unwrap().width, Dimension::Percent(100.0));
            bar.set_progress(&mut tree, -5.0);
            assert_eq!(tree.style(fill).unwrap().width, Dimension::Percent(0.0));
        });
    }

    #[test]
    fn test_set_progress_ignored_for_spinner() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let spinner = loader().build(&mut tree);
            // Must not panic or restyle anything.
            spinner.set_progress(&mut tree, 50.0);
        });
    }

    #[test]
    fn test_message_create_and_update() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let mut spinner = loader().message("Loading...").build(&mut tree);
            let message_el = tree.children(spinner.render())[1];
            assert_eq!(tree.text(message_el), Some("Loading..."));

            spinner.set_message(&mut tree, "Almost there");
            assert_eq!(tree.text(message_el), Some("Almost there"));
        });
    }

    #[test]
    fn test_set_kind_rebuilds_indicator() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let mut widget = loader().build(&mut tree);
            widget.set_kind(&mut tree, LoaderKind::Bar);
            assert_eq!(widget.kind(), LoaderKind::Bar);
            let indicator = tree.children(widget.render())[0];
            assert!(tree.style(indicator).unwrap().overflow_hidden);
        });
    }

    #[test]
    fn test_destroy_removes_injected_keyframes() {
        with_scheme(ColorScheme::Light, || {
            let mut tree = ElementTree::new();
            let before = tree.len();
            let spinner = loader().build(&mut tree);
            spinner.destroy(&mut tree);
            assert_eq!(tree.len(), before);
        });
    }
}
