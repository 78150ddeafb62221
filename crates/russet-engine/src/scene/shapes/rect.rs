use crate::coords::Point;
use crate::paint::Color;

/// Axis-aligned (before rotation) rectangle node.
///
/// `position` places the rectangle's anchor point in the parent's space; the
/// rectangle itself spans `(-anchor) .. (-anchor + (width, height))` locally.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub position: Point,
    pub anchor: Point,
    pub width: f32,
    pub height: f32,
    /// Radians.
    pub rotation: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    /// Zero disables the outline.
    pub line_width: f32,
}

impl Rect {
    pub fn new(position: Point, width: f32, height: f32) -> Self {
        Self {
            position,
            anchor: Point::zero(),
            width,
            height,
            rotation: 0.0,
            fill: Some(Color::WHITE),
            stroke: Some(Color::WHITE),
            line_width: 0.0,
        }
    }

    /// Moves the anchor to the rectangle's centre, so `position` and `rotation`
    /// act about the middle.
    pub fn center_anchor(&mut self) {
        self.anchor = Point::new(self.width / 2.0, self.height / 2.0);
    }
}
