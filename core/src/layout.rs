//! Layout values.
//!
//! A [`Layout`] is configuration for an external layout engine; nothing in this crate computes a
//! flexbox layout. The only geometry resolved here is [`FixedLayoutEngine`], which honors explicit
//! sizes and absolute offsets and nothing else.

use crate::rect::Rect;
use cgmath::{Point2, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl Default for FlexDirection {
    fn default() -> Self {
        FlexDirection::Column
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexWrap {
    NoWrap,
    Wrap,
}

impl Default for FlexWrap {
    fn default() -> Self {
        FlexWrap::NoWrap
    }
}

/// Flexible box configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Flex {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub grow: Option<f64>,
    pub shrink: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
}

impl Default for Justify {
    fn default() -> Self {
        Justify::FlexStart
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

impl Default for Align {
    fn default() -> Self {
        Align::Stretch
    }
}

/// One axis of a node’s size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension {
    pub value: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl Dimension {
    /// A fixed size.
    pub fn fixed(value: f64) -> Dimension {
        Dimension {
            value: Some(value),
            ..Dimension::default()
        }
    }

    /// Clamps a candidate size to this dimension’s bounds.
    fn resolve(&self, available: f64) -> f64 {
        let mut size = self.value.unwrap_or(available);
        if let Some(max) = self.maximum {
            size = size.min(max);
        }
        if let Some(min) = self.minimum {
            size = size.max(min);
        }
        size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: Dimension,
    pub height: Dimension,
}

/// Per-edge values (margin, padding, absolute offsets).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub bottom: Option<f64>,
    pub right: Option<f64>,
}

impl Edges {
    /// The same value on every edge.
    pub fn all(value: f64) -> Edges {
        Edges {
            top: Some(value),
            left: Some(value),
            bottom: Some(value),
            right: Some(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    Relative,
    Absolute(Edges),
}

impl Default for Position {
    fn default() -> Self {
        Position::Relative
    }
}

/// Layout configuration attached to every component.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub flex: Flex,
    pub justify_content: Justify,
    pub align_items: Align,
    pub dimensions: Dimensions,
    pub position: Position,
    pub margin: Edges,
    pub padding: Edges,
    pub aspect_ratio: Option<f64>,
}

/// Creates a layout by configuring the default one.
///
/// ```
/// use roost_core::layout::{layout, Dimension};
///
/// let fixed = layout(|l| l.dimensions.height = Dimension::fixed(44.));
/// assert_eq!(fixed.dimensions.height.value, Some(44.));
/// ```
pub fn layout<F: FnOnce(&mut Layout)>(configure: F) -> Layout {
    let mut layout = Layout::default();
    configure(&mut layout);
    layout
}

/// The layout engine collaborator: resolves a layout value inside the container’s bounds.
pub trait LayoutEngine {
    fn frame(&self, layout: &Layout, bounds: Rect) -> Rect;
}

/// Resolves explicit sizes, margins and absolute offsets; everything else fills its bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLayoutEngine;

impl LayoutEngine for FixedLayoutEngine {
    fn frame(&self, layout: &Layout, bounds: Rect) -> Rect {
        let margin = layout.margin;
        let available = bounds.inset(
            margin.top.unwrap_or(0.),
            margin.left.unwrap_or(0.),
            margin.bottom.unwrap_or(0.),
            margin.right.unwrap_or(0.),
        );

        let width = layout.dimensions.width.resolve(available.size.x);
        let mut height = layout.dimensions.height.resolve(available.size.y);
        if let (Some(ratio), None) = (layout.aspect_ratio, layout.dimensions.height.value) {
            if ratio > 0. {
                height = width / ratio;
            }
        }

        let origin = match layout.position {
            Position::Relative => available.origin,
            Position::Absolute(offsets) => {
                let x = match (offsets.left, offsets.right) {
                    (Some(left), _) => bounds.origin.x + left,
                    (None, Some(right)) => bounds.origin.x + bounds.size.x - right - width,
                    (None, None) => available.origin.x,
                };
                let y = match (offsets.top, offsets.bottom) {
                    (Some(top), _) => bounds.origin.y + top,
                    (None, Some(bottom)) => bounds.origin.y + bounds.size.y - bottom - height,
                    (None, None) => available.origin.y,
                };
                Point2::new(x, y)
            }
        };

        Rect::new(origin, Vector2::new(width, height))
    }
}

#[test]
fn test_fixed_layout_engine() {
    let bounds = Rect::new(Point2::new(0., 0.), Vector2::new(320., 480.));
    let engine = FixedLayoutEngine;

    assert_eq!(
        engine.frame(&Layout::default(), bounds),
        bounds,
        "the default layout should fill its bounds"
    );

    let header = layout(|l| {
        l.dimensions.height = Dimension::fixed(44.);
        l.margin = Edges::all(8.);
    });
    let frame = engine.frame(&header, bounds);
    assert_eq!(frame.origin, Point2::new(8., 8.));
    assert_eq!(frame.size, Vector2::new(304., 44.));

    let badge = layout(|l| {
        l.dimensions.width = Dimension::fixed(20.);
        l.dimensions.height = Dimension::fixed(20.);
        l.position = Position::Absolute(Edges {
            right: Some(10.),
            bottom: Some(10.),
            ..Edges::default()
        });
    });
    let frame = engine.frame(&badge, bounds);
    assert_eq!(frame.origin, Point2::new(290., 450.), "offsets anchor to the far edges");
}

#[test]
fn test_dimension_clamps() {
    let dimension = Dimension {
        value: None,
        minimum: Some(10.),
        maximum: Some(100.),
    };
    assert_eq!(dimension.resolve(500.), 100.);
    assert_eq!(dimension.resolve(2.), 10.);
}
