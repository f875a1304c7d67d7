//! Image widget
//!
//! A clipped container around an `img` element with optional lazy loading
//! through the intersection registry, fade-in on load, and a themed inline
//! placeholder when the resource fails.

use opal_layout::prelude::*;
use opal_theme::{ColorToken, RadiusToken, ThemeState};

use crate::lazy::DATA_SRC_ATTRIBUTE;
use crate::styling::ink_color;
use crate::text::localized;

const LAZY_ROOT_MARGIN: f32 = 200.0;

type LifecycleHandler = Box<dyn FnMut(&mut ElementTree) + Send>;

/// Create an image builder for a source
pub fn image(src: impl Into<String>) -> ImageBuilder {
    ImageBuilder {
        src: src.into(),
        alt: None,
        width: None,
        height: None,
        lazy: false,
        rounded: false,
        bordered: false,
        placeholder: None,
        aspect_ratio: None,
        on_load: None,
        on_error: None,
    }
}

/// Builder for creating images
pub struct ImageBuilder {
    src: String,
    alt: Option<String>,
    width: Option<Dimension>,
    height: Option<Dimension>,
    lazy: bool,
    rounded: bool,
    bordered: bool,
    placeholder: Option<Color>,
    aspect_ratio: Option<f32>,
    on_load: Option<LifecycleHandler>,
    on_error: Option<LifecycleHandler>,
}

impl ImageBuilder {
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn width(mut self, width: Dimension) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }

    /// Defer loading until the container is reported visible
    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Background shown while the resource loads
    pub fn placeholder(mut self, placeholder: Color) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    pub fn on_load<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut ElementTree) + Send + 'static,
    {
        self.on_load = Some(Box::new(callback));
        self
    }

    pub fn on_error<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut ElementTree) + Send + 'static,
    {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Build the image into the tree
    pub fn build(self, tree: &mut ElementTree) -> Image {
        let theme = ThemeState::get();

        let container = tree.create_element("div");
        let width = self.width;
        let height = self.height;
        let aspect_ratio = self.aspect_ratio;
        let radius = if self.rounded {
            BorderRadius::Full
        } else {
            BorderRadius::Px(theme.radius(RadiusToken::Sm))
        };
        let border = self.bordered.then(|| Border::new(1.0, ink_color(theme)));
        tree.update_style(container, |style| {
            style.position = Position::Relative;
            style.display = Display::InlineBlock;
            style.overflow_hidden = true;
            if let Some(width) = width {
                style.width = width;
            }
            if let Some(height) = height {
                style.height = height;
            }
            style.aspect_ratio = aspect_ratio;
            style.border_radius = radius;
            style.border = border;
        });

        let img = tree.create_element("img");
        tree.set_attribute(img, "alt", self.alt.unwrap_or_default());
        tree.set_attribute(img, DATA_SRC_ATTRIBUTE, self.src.as_str());
        let placeholder = self.placeholder;
        tree.update_style(img, |style| {
            style.width = Dimension::Percent(100.0);
            style.height = Dimension::Percent(100.0);
            style.object_fit = Some(ObjectFit::Cover);
            style.transition = Some(Transition::new(
                TransitionProperty::Opacity,
                300,
                Easing::Ease,
            ));
            style.opacity = 0.0;
            style.background = placeholder;
        });

        let mut on_load = self.on_load;
        tree.add_listener(img, event_types::LOAD, move |tree, _| {
            tree.update_style(img, |style| style.opacity = 1.0);
            if let Some(callback) = &mut on_load {
                callback(tree);
            }
        });

        let src_for_log = self.src.clone();
        let mut on_error = self.on_error;
        tree.add_listener(img, event_types::ERROR, move |tree, _| {
            tracing::warn!(target: "opal_ui::image", src = %src_for_log, "image failed to load");
            if let Some(callback) = &mut on_error {
                callback(tree);
            }
            show_error_state(tree, container);
        });

        let widget = Image { container, img };
        if self.lazy && tree.intersection_supported() {
            tree.observe_visibility(container, LAZY_ROOT_MARGIN, move |tree| {
                load(tree, container, img, placeholder);
            });
        } else {
            load(tree, container, img, placeholder);
        }
        widget
    }
}

fn load(tree: &mut ElementTree, container: ElementId, img: ElementId, placeholder: Option<Color>) {
    if let Some(placeholder) = placeholder {
        let backdrop = tree.create_element("div");
        tree.update_style(backdrop, |style| {
            style.position = Position::Absolute;
            style.inset = Inset::zero();
            style.background = Some(placeholder);
        });
        tree.append_child(container, backdrop);
    }
    let src = tree
        .attribute(img, DATA_SRC_ATTRIBUTE)
        .unwrap_or_default()
        .to_string();
    tree.set_attribute(img, "src", src);
    tree.append_child(container, img);
}

fn show_error_state(tree: &mut ElementTree, container: ElementId) {
    let theme = ThemeState::get();
    let error = theme.color(ColorToken::Error);
    let tint = if theme.scheme().is_dark() {
        error.with_alpha(0.125)
    } else {
        error.with_alpha(0.0625)
    };
    let message = localized("image.load-failed", "Image failed to load");

    let overlay = tree.create_element("div");
    tree.set_text(overlay, message);
    tree.update_style(overlay, |style| {
        style.position = Position::Absolute;
        style.inset = Inset::zero();
        style.display = Display::Flex;
        style.align_items = Some(Align::Center);
        style.justify_content = Some(Align::Center);
        style.background = Some(tint);
        style.color = Some(error);
        style.font_family = Some("sans-serif".to_string());
        style.font_size = Some(14.0);
    });
    tree.append_child(container, overlay);
}

/// A built image
pub struct Image {
    container: ElementId,
    img: ElementId,
}

impl Image {
    pub fn render(&self) -> ElementId {
        self.container
    }

    /// The underlying `img` element
    pub fn img(&self) -> ElementId {
        self.img
    }

    pub fn destroy(self, tree: &mut ElementTree) {
        tree.remove(self.container);
    }
}
