//! Lazy-image loading helper
//!
//! Defers promoting an element's `data-src` attribute into `src` until the
//! element is reported visible. When the environment offers no visibility
//! observation, the image loads immediately.

use opal_layout::{ElementId, ElementTree};

/// Attribute holding the deferred image source
pub const DATA_SRC_ATTRIBUTE: &str = "data-src";

/// Lazily load an image element via the tree's intersection registry
///
/// One-shot: the first visibility notification promotes the source and
/// drops the watch.
pub fn lazy_load_image(tree: &mut ElementTree, img: ElementId, root_margin: f32) {
    if !tree.intersection_supported() {
        promote_deferred_src(tree, img);
        return;
    }
    tree.observe_visibility(img, root_margin, move |tree| {
        promote_deferred_src(tree, img);
    });
}

fn promote_deferred_src(tree: &mut ElementTree, img: ElementId) {
    let src = tree
        .attribute(img, DATA_SRC_ATTRIBUTE)
        .unwrap_or_default()
        .to_string();
    tree.set_attribute(img, "src", src);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_on_visibility() {
        let mut tree = ElementTree::new();
        let img = tree.create_element("img");
        tree.set_attribute(img, DATA_SRC_ATTRIBUTE, "photo.jpg");

        lazy_load_image(&mut tree, img, 0.0);
        assert!(tree.is_observed(img));
        assert_eq!(tree.attribute(img, "src"), None);

        tree.set_intersecting(img);
        assert_eq!(tree.attribute(img, "src"), Some("photo.jpg"));
        assert!(!tree.is_observed(img));
    }

    #[test]
    fn test_loads_immediately_without_observer_support() {
        let mut tree = ElementTree::new();
        tree.set_intersection_supported(false);
        let img = tree.create_element("img");
        tree.set_attribute(img, DATA_SRC_ATTRIBUTE, "photo.jpg");

        lazy_load_image(&mut tree, img, 0.0);
        assert_eq!(tree.attribute(img, "src"), Some("photo.jpg"));
        assert!(!tree.is_observed(img));
    }

    #[test]
    fn test_missing_data_src_loads_empty() {
        let mut tree = ElementTree::new();
        let img = tree.create_element("img");
        lazy_load_image(&mut tree, img, 0.0);
        tree.set_intersecting(img);
        assert_eq!(tree.attribute(img, "src"), Some(""));
    }
}
