use crate::coords::Point;
use crate::paint::Color;

/// Circle node centred on `-anchor` in its own local space.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub position: Point,
    pub anchor: Point,
    pub radius: f32,
    /// Radians. Only visible when `anchor` is non-zero.
    pub rotation: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub line_width: f32,
}

impl Circle {
    pub fn new(position: Point, radius: f32) -> Self {
        Self {
            position,
            anchor: Point::zero(),
            radius,
            rotation: 0.0,
            fill: Some(Color::WHITE),
            stroke: Some(Color::WHITE),
            line_width: 0.0,
        }
    }
}
