//! Rectangles.

use cgmath::{Point2, Vector2, Zero};

/// A rectangle; the geometry a layout engine resolves a layout into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Rectangle origin.
    pub origin: Point2<f64>,

    /// Rectangle size.
    pub size: Vector2<f64>,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect { origin, size }
    }

    /// Returns a zero-sized rectangle at the origin.
    pub fn zero() -> Rect {
        Rect {
            origin: Point2::new(0., 0.),
            size: Vector2::zero(),
        }
    }

    /// Returns a new rectangle inset by the given amounts on each edge.
    pub fn inset(&self, top: f64, left: f64, bottom: f64, right: f64) -> Rect {
        Rect {
            origin: (self.origin.x + left, self.origin.y + top).into(),
            size: (
                (self.size.x - left - right).max(0.),
                (self.size.y - top - bottom).max(0.),
            )
                .into(),
        }
    }
}

#[test]
fn test_rect_inset_clamps() {
    let rect = Rect::new(Point2::new(0., 0.), Vector2::new(10., 10.));
    let inset = rect.inset(2., 3., 2., 3.);
    assert_eq!(inset.origin, Point2::new(3., 2.));
    assert_eq!(inset.size, Vector2::new(4., 6.));
    assert_eq!(
        rect.inset(20., 0., 0., 0.).size.y,
        0.,
        "oversized insets should clamp to an empty rect"
    );
}
