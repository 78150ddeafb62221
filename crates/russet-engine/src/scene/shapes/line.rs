use crate::coords::Point;
use crate::paint::Color;

/// Straight segment between two points in the parent's space.
///
/// The first endpoint doubles as the local origin: `rotation` turns the
/// segment about `(x1, y1)` offset by `anchor`. Lines are never filled, and
/// unlike [`Rect`](super::Rect) and [`Circle`](super::Circle) they are stroked
/// even when `line_width` is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub anchor: Point,
    pub rotation: f32,
    pub stroke: Color,
    pub line_width: f32,
}

impl Line {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            anchor: Point::zero(),
            rotation: 0.0,
            stroke: Color::WHITE,
            line_width: 0.0,
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Segment endpoints in the line's own local frame (after the translate to
    /// `(x1, y1)` and before rotation).
    #[inline]
    pub fn local_endpoints(&self) -> (Point, Point) {
        let from = -self.anchor;
        let to = self.end() - self.start() - self.anchor;
        (from, to)
    }
}
