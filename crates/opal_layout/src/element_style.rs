//! Unified element styling
//!
//! `ElementStyle` is the concrete style record carried by every element
//! node. Unlike a merge-style schema, every property holds a final value:
//! the base style applicator and the widgets assign properties outright,
//! and assigning the same configuration twice leaves the record unchanged.

use opal_core::{Color, Shadow};

/// Outer display mode of an element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Block,
    Inline,
    InlineBlock,
    Flex,
    InlineFlex,
    /// Hidden; the element keeps its place in the tree
    None,
}

/// Positioning scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

/// Box sizing model
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

/// Main axis of a flex container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

/// Alignment along either flex axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
    SpaceBetween,
}

/// Horizontal text alignment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Pointer cursor shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    NotAllowed,
}

/// A length that may be absolute, relative, or automatic
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Dimension {
    #[default]
    Auto,
    Px(f32),
    Percent(f32),
}

/// Corner rounding
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BorderRadius {
    #[default]
    None,
    Px(f32),
    /// Fully round (circular) corners
    Full,
}

/// How replaced content fits its container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObjectFit {
    #[default]
    Fill,
    Cover,
    Contain,
}

/// Per-edge lengths (px)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical/horizontal shorthand (CSS two-value form)
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Offsets for positioned elements
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Inset {
    pub top: Option<Dimension>,
    pub right: Option<Dimension>,
    pub bottom: Option<Dimension>,
    pub left: Option<Dimension>,
}

impl Inset {
    /// `inset: 0` - pin to all four edges
    pub const fn zero() -> Self {
        Self {
            top: Some(Dimension::Px(0.0)),
            right: Some(Dimension::Px(0.0)),
            bottom: Some(Dimension::Px(0.0)),
            left: Some(Dimension::Px(0.0)),
        }
    }
}

/// A solid border
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Property group a transition applies to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionProperty {
    #[default]
    All,
    Opacity,
    Width,
}

/// Timing function
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Ease,
    Linear,
    EaseInOut,
}

/// A property transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub property: TransitionProperty,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(property: TransitionProperty, duration_ms: u64, easing: Easing) -> Self {
        Self {
            property,
            duration_ms,
            easing,
        }
    }
}

/// A named keyframe animation reference
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub name: String,
    pub duration_ms: u64,
    pub easing: Easing,
    pub delay_ms: u64,
    pub infinite: bool,
}

/// Visual style properties of an element
///
/// Defaults mirror an unstyled node; `Option` fields mean "not set", which
/// a rendering backend would resolve through inheritance.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementStyle {
    pub display: Display,
    pub position: Position,
    pub inset: Inset,
    pub z_index: Option<i32>,

    pub margin: EdgeInsets,
    pub padding: EdgeInsets,
    pub box_sizing: BoxSizing,

    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Option<f32>,
    pub aspect_ratio: Option<f32>,

    pub flex_direction: FlexDirection,
    pub align_items: Option<Align>,
    pub justify_content: Option<Align>,
    pub gap: f32,

    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<u16>,
    pub line_height: Option<f32>,
    pub text_align: Option<TextAlign>,

    pub color: Option<Color>,
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub border_top_color: Option<Color>,
    pub border_radius: BorderRadius,
    pub border_collapse: bool,
    pub shadow: Option<Shadow>,

    pub cursor: Cursor,
    pub user_select: bool,
    pub pointer_events: bool,
    pub overflow_hidden: bool,
    pub object_fit: Option<ObjectFit>,
    pub opacity: f32,

    pub transition: Option<Transition>,
    pub animation: Option<Animation>,
}

impl ElementStyle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            display: Display::Block,
            position: Position::Static,
            inset: Inset::default(),
            z_index: None,
            margin: EdgeInsets::ZERO,
            padding: EdgeInsets::ZERO,
            box_sizing: BoxSizing::ContentBox,
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: None,
            aspect_ratio: None,
            flex_direction: FlexDirection::Row,
            align_items: None,
            justify_content: None,
            gap: 0.0,
            font_family: None,
            font_size: None,
            font_weight: None,
            line_height: None,
            text_align: None,
            color: None,
            background: None,
            border: None,
            border_top_color: None,
            border_radius: BorderRadius::None,
            border_collapse: false,
            shadow: None,
            cursor: Cursor::Default,
            user_select: true,
            pointer_events: true,
            overflow_hidden: false,
            object_fit: None,
            opacity: 1.0,
            transition: None,
            animation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let style = ElementStyle::new();
        assert_eq!(style.display, Display::Block);
        assert_eq!(style.opacity, 1.0);
        assert!(style.user_select);
        assert_eq!(style.border_radius, BorderRadius::None);
        assert!(style.font_size.is_none());
    }

    #[test]
    fn test_edge_insets_shorthands() {
        assert_eq!(EdgeInsets::uniform(8.0).left, 8.0);
        let pad = EdgeInsets::symmetric(4.0, 16.0);
        assert_eq!(pad.top, 4.0);
        assert_eq!(pad.bottom, 4.0);
        assert_eq!(pad.right, 16.0);
    }

    #[test]
    fn test_inset_zero_pins_all_edges() {
        let inset = Inset::zero();
        assert_eq!(inset.top, Some(Dimension::Px(0.0)));
        assert_eq!(inset.left, Some(Dimension::Px(0.0)));
    }
}
