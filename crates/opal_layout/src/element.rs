//! Element nodes
//!
//! An element is a tagged node with optional text content, an ordered
//! attribute map, a concrete style record, and child links. Nodes live in
//! the [`ElementTree`](crate::tree::ElementTree) arena and are addressed by
//! [`ElementId`](crate::tree::ElementId).

use indexmap::IndexMap;

use crate::element_style::ElementStyle;
use crate::tree::ElementId;

/// A single node in the element tree
#[derive(Debug)]
pub struct Element {
    tag: String,
    text: Option<String>,
    attributes: IndexMap<String, String>,
    pub style: ElementStyle,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            attributes: IndexMap::new(),
            style: ElementStyle::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn clear_text(&mut self) {
        self.text = None;
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) -> bool {
        self.attributes.shift_remove(name).is_some()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_keep_insertion_order() {
        let mut el = Element::new("input");
        el.set_attribute("type", "text");
        el.set_attribute("placeholder", "Search...");
        el.set_attribute("id", "q");
        let keys: Vec<&str> = el.attributes().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["type", "placeholder", "id"]);
    }

    #[test]
    fn test_text_content() {
        let mut el = Element::new("p");
        assert!(el.text().is_none());
        el.set_text("hello");
        assert_eq!(el.text(), Some("hello"));
        el.clear_text();
        assert!(el.text().is_none());
    }
}
